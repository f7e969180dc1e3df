use crate::backend::Backend;
use crate::dialog::Icon;
use crate::error::AskpassError;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Optional settings read from a YAML file. Every field may be omitted;
/// command line options take precedence over the file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub message: Option<String>,
    pub title: Option<String>,
    pub icon: Option<Icon>,
    pub backend: Option<Backend>,
}

impl Config {
    /// `<config dir>/wit-askpass/config.yml`, if the platform has a config
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wit-askpass").join("config.yml"))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AskpassError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| AskpassError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|source| AskpassError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the file at [`Config::default_path`], falling back to defaults
    /// when there is no such file.
    pub fn load_default() -> Result<Self, AskpassError> {
        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };
        match Self::load(&path) {
            Err(AskpassError::ConfigIo { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            result => result,
        }
    }

    fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }
}
