// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command line configuration
//!
//! Read from the file given with `--config`, or `$HOME/.ConvertSql.yaml`.
//! Nothing in it changes the converted SQL.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_NAME: &str = ".ConvertSql.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// One of error, warn, info, debug, trace
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Why a config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {1}", path = .0.display())]
    Read(PathBuf, #[source] io::Error),

    #[error("cannot parse config file {path}: {1}", path = .0.display())]
    Parse(PathBuf, #[source] serde_yaml::Error),
}

/// Outcome of config discovery.
#[derive(Debug)]
pub enum Loaded {
    /// A file was found and parsed
    File(PathBuf, Config),
    /// No explicit file and no default file
    Defaults,
    /// A file was selected but is unusable; defaults apply
    Failed(ConfigError),
}

impl Loaded {
    pub fn config(&self) -> Config {
        match self {
            Loaded::File(_, config) => config.clone(),
            Loaded::Defaults | Loaded::Failed(_) => Config::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // an empty document is a valid, empty config
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Config::from_yaml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// `$HOME/.ConvertSql.yaml`, if the home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_NAME))
    }

    /// Load `explicit` if given, else the default file if it exists.
    pub fn discover(explicit: Option<&Path>) -> Loaded {
        Config::discover_in(explicit, Config::default_path())
    }

    fn discover_in(explicit: Option<&Path>, default: Option<PathBuf>) -> Loaded {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default {
                Some(path) if path.is_file() => path,
                _ => return Loaded::Defaults,
            },
        };

        match Config::load(&path) {
            Ok(config) => Loaded::File(path, config),
            Err(e) => Loaded::Failed(e),
        }
    }
}
