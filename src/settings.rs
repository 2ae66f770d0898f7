// std imports
use std::path::Path;

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.toml");

// ---

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub output_format: OutputFormat,
    pub stdin_name: String,
}

impl Settings {
    /// Loads settings layering the given files over the embedded defaults.
    ///
    /// Files are applied in order, so later files override earlier ones.
    /// A file that is not `required` and does not exist is skipped.
    pub fn load<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source<'a>>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        for source in sources {
            log::debug!("loading settings from {}", source.path.display());
            builder = builder.add_source(File::from(source.path).required(source.required));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Returns the embedded default settings.
    pub fn embedded() -> Result<Self> {
        Self::load([])
    }
}

// ---

/// A settings file to be layered over the defaults.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    pub path: &'a Path,
    pub required: bool,
}

impl<'a> Source<'a> {
    #[inline]
    pub fn required(path: &'a Path) -> Self {
        Self { path, required: true }
    }

    #[inline]
    pub fn optional(path: &'a Path) -> Self {
        Self { path, required: false }
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Canonical S-expression text.
    Sexpr,
    /// Rust debug representation of the tree.
    Debug,
    /// Pretty-printed JSON.
    Json,
}
