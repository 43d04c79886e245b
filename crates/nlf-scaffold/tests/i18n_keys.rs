use std::collections::BTreeMap;

#[test]
fn cli_i18n_keys_exist_in_en_catalog() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("i18n/en.json");
    let raw = std::fs::read_to_string(&path).expect("read i18n/en.json");
    let catalog: BTreeMap<String, String> = serde_json::from_str(&raw).expect("parse en.json");

    let required = [
        "cli.catalog.bundled_invalid",
        "cli.catalog.load_failed",
        "cli.config.no_dir",
        "cli.config.parse_failed",
        "cli.config.read_failed",
        "cli.languages.header",
        "cli.new.answers_invalid",
        "cli.new.answers_read_failed",
        "cli.new.answers_required",
        "cli.new.create_dir_failed",
        "cli.new.intro",
        "cli.new.remember_failed",
        "cli.new.run_failed",
        "cli.new.write_failed",
        "cli.new.written",
        "cli.prompt.answer_yes_no",
        "cli.prompt.invalid_answer",
        "cli.prompt.invalid_choice",
        "cli.prompt.select_number_or_value",
        "cli.prompt.value_required",
    ];

    for key in required {
        assert!(catalog.contains_key(key), "missing i18n key {key}");
    }
}

#[test]
fn locale_bundles_match_the_en_catalog() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("i18n");
    let read = |name: &str| -> BTreeMap<String, String> {
        let raw = std::fs::read_to_string(dir.join(name)).expect("read locale bundle");
        serde_json::from_str(&raw).unwrap_or_else(|err| panic!("parse {name}: {err}"))
    };
    let english = read("en.json");

    for locale in ["de.json", "es.json", "fr.json"] {
        let bundle = read(locale);
        for (key, message) in &bundle {
            let source = english
                .get(key)
                .unwrap_or_else(|| panic!("{locale} has unknown key {key}"));
            assert_eq!(
                message.matches("{}").count(),
                source.matches("{}").count(),
                "{locale} {key} changes the placeholder count"
            );
        }
    }
}
