use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nlf_qa::PriorAnswers;
use thiserror::Error;

use crate::atomic::write_atomic;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read remembered answers {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("remembered answers {path} are not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize remembered answers: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write remembered answers {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// `answers.json` holding answers remembered between runs.
#[derive(Debug, Clone)]
pub struct AnswerStore {
    path: PathBuf,
}

impl AnswerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty store.
    pub fn load(&self) -> Result<PriorAnswers, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(PriorAnswers::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        PriorAnswers::from_json_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, answers: &PriorAnswers) -> Result<(), StoreError> {
        let json = answers.to_json_pretty()?;
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        write_atomic(&self.path, json.as_bytes()).map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nlf_qa::{AnswerValue, QuestionKey};

    #[test]
    fn missing_file_loads_empty() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        let store = AnswerStore::new(temp.path().join("answers.json"));
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn saves_and_reloads_into_nested_directory() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        let store = AnswerStore::new(temp.path().join("nested/answers.json"));
        let mut answers = PriorAnswers::new();
        answers.insert(QuestionKey::Name, "Klingon");
        answers.insert(QuestionKey::Rtl, false);

        store.save(&answers).expect("save");

        let reloaded = store.load().expect("load");
        assert_eq!(reloaded.get(QuestionKey::Name), Some(&AnswerValue::from("Klingon")));
        assert_eq!(reloaded.get(QuestionKey::Rtl), Some(&AnswerValue::Flag(false)));
    }

    #[test]
    fn corrupt_file_reports_its_path() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        let path = temp.path().join("answers.json");
        fs::write(&path, "{ not json").expect("seed");
        let err = AnswerStore::new(&path).load().expect_err("corrupt");
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("answers.json"));
    }
}
