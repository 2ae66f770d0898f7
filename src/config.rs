// std imports
use std::path::{Path, PathBuf};

// local imports
use crate::{
    error::Result,
    settings::{Settings, Source},
};

// ---

pub const APP_NAME: &str = "slicep";
const CONFIG_FILE: &str = "config.toml";

/// Returns path of the per-user configuration file, if the platform defines a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

/// Starts building a settings loader that applies the given files in order.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader {
        paths: paths.into_iter().map(|path| path.as_ref().to_path_buf()).collect(),
        no_default: false,
    }
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    /// Skips the per-user configuration file.
    pub fn no_default(mut self, value: bool) -> Self {
        self.no_default = value;
        self
    }

    pub fn load(self) -> Result<Settings> {
        if self.no_default && self.paths.is_empty() {
            return Settings::embedded();
        }

        let user = if self.no_default { None } else { user_config_path() };

        let sources = user
            .iter()
            .map(|path| Source::optional(path))
            .chain(self.paths.iter().map(|path| Source::required(path)));

        Settings::load(sources)
    }
}
