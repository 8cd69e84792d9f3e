//! Output root normalization

use std::fmt;
use std::path::{Path, PathBuf};

const CURRENT_DIR: &str = ".";
const RELATIVE_PREFIX: &str = "./";

/// Where a skeleton gets generated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputRoot {
    /// The directory the tool was invoked from; never created
    #[default]
    CurrentDir,
    /// A new directory, stored in its normalized form (`./name` or absolute)
    Named(String),
}

impl OutputRoot {
    /// Normalize a user supplied output path
    ///
    /// A bare name becomes `./name`; absolute paths and names already
    /// starting with `./` are kept as they are.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == CURRENT_DIR || raw == RELATIVE_PREFIX {
            return OutputRoot::CurrentDir;
        }

        if raw.starts_with(RELATIVE_PREFIX) || Path::new(raw).is_absolute() {
            OutputRoot::Named(raw.to_string())
        } else {
            OutputRoot::Named(format!("{}{}", RELATIVE_PREFIX, raw))
        }
    }

    pub fn is_current_dir(&self) -> bool {
        matches!(self, OutputRoot::CurrentDir)
    }

    pub fn path(&self) -> PathBuf {
        match self {
            OutputRoot::CurrentDir => PathBuf::from(CURRENT_DIR),
            OutputRoot::Named(root) => PathBuf::from(root),
        }
    }

    /// The root as shown to the user, without the `./` prefix
    pub fn display_name(&self) -> &str {
        match self {
            OutputRoot::CurrentDir => CURRENT_DIR,
            OutputRoot::Named(root) => root.strip_prefix(RELATIVE_PREFIX).unwrap_or(root),
        }
    }

    /// Name used for files named after the project, `lib` for the current directory
    pub fn file_stem(&self) -> &str {
        match self {
            OutputRoot::CurrentDir => "lib",
            OutputRoot::Named(_) => {
                let name = self.display_name().trim_end_matches('/');
                name.rsplit('/').next().unwrap_or(name)
            }
        }
    }

    /// Resolve `root` against `base` (used when the generator works outside the cwd)
    pub fn resolve(&self, base: &Path) -> PathBuf {
        base.join(self.path())
    }
}

impl fmt::Display for OutputRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputRoot::CurrentDir => write!(f, "{}", CURRENT_DIR),
            OutputRoot::Named(root) => write!(f, "{}", root),
        }
    }
}
