use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

macro_rules! string_keys {
    ($($variant:ident),+ $(,)?) => {
        /// Translatable strings of an NSIS language file, in file order.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum StringKey {
            $($variant),+
        }

        impl StringKey {
            /// Every key in the order the NLF layout declares them.
            pub const ALL: &'static [StringKey] = &[$(StringKey::$variant),+];

            /// Identifier as written after `# ^` in the NLF file.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(StringKey::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

string_keys! {
    Branding,
    SetupCaption,
    UninstallCaption,
    LicenseSubCaption,
    ComponentsSubCaption,
    DirSubCaption,
    InstallingSubCaption,
    CompletedSubCaption,
    UnComponentsSubCaption,
    UnDirSubCaption,
    ConfirmSubCaption,
    UninstallingSubCaption,
    UnCompletedSubCaption,
    BackBtn,
    NextBtn,
    AgreeBtn,
    AcceptBtn,
    DontAcceptBtn,
    InstallBtn,
    UninstallBtn,
    CancelBtn,
    CloseBtn,
    BrowseBtn,
    ShowDetailsBtn,
    ClickNext,
    ClickInstall,
    ClickUninstall,
    Name,
    Completed,
    LicenseText,
    LicenseTextCB,
    LicenseTextRB,
    UnLicenseText,
    UnLicenseTextCB,
    UnLicenseTextRB,
    Custom,
    ComponentsText,
    ComponentsSubText1,
    ComponentsSubText2_NoInstTypes,
    ComponentsSubText2,
    UnComponentsText,
    UnComponentsSubText1,
    UnComponentsSubText2_NoInstTypes,
    UnComponentsSubText2,
    DirText,
    DirSubText,
    DirBrowseText,
    UnDirText,
    UnDirSubText,
    UnDirBrowseText,
    SpaceAvailable,
    SpaceRequired,
    UninstallingText,
    UninstallingSubText,
    FileError,
    FileError_NoIgnore,
    CantWrite,
    CopyFailed,
    CopyTo,
    Registering,
    Unregistering,
    SymbolNotFound,
    CouldNotLoad,
    CreateFolder,
    CreateShortcut,
    CreatedUninstaller,
    Delete,
    DeleteOnReboot,
    ErrorCreatingShortcut,
    ErrorCreating,
    ErrorDecompressing,
    ErrorRegistering,
    ExecShell,
    Exec,
    Extract,
    ErrorWriting,
    InvalidOpcode,
    NoOLE,
    OutputFolder,
    RemoveFolder,
    RenameOnReboot,
    Rename,
    Skipped,
    CopyDetails,
    LogInstall,
    Byte,
    Kilo,
    Mega,
    Giga,
}

impl StringKey {
    pub const COUNT: usize = Self::ALL.len();

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == raw)
    }
}

impl fmt::Display for StringKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StringKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CatalogError::UnknownStringKey(s.to_string()))
    }
}
