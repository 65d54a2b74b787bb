//! A loaded configuration file together with the path it came from.

use crate::config::{Config, ConfigOptions};
use crate::error::ConfigResult;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// Handle returned by [`ConfigFile::load`]. Edits go through the wrapped
/// [`Config`] (directly or via `Deref`), and [`ConfigFile::save`] writes back
/// to the original path.
///
/// ```no_run
/// use dupini::ConfigFile;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut engine = ConfigFile::load("ROEngine.ini")?;
/// engine.set("SystemSettings", ("MaxAnisotropy", "16", ""));
/// engine.save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Read and parse a file with default options
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::load_with_options(path, ConfigOptions::default())
    }

    /// Read and parse a file with custom options
    pub fn load_with_options(path: impl AsRef<Path>, options: ConfigOptions) -> ConfigResult<Self> {
        let path = path.as_ref();
        let mut config = Config::with_options(options)?;
        config.parse_file(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    /// Overwrite the file this handle was loaded from
    pub fn save(&self) -> ConfigResult<()> {
        self.config.save_as(&self.path)
    }

    /// Write to another path; the handle keeps pointing at the original
    pub fn save_as(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        self.config.save_as(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

impl Deref for ConfigFile {
    type Target = Config;

    fn deref(&self) -> &Config {
        &self.config
    }
}

impl DerefMut for ConfigFile {
    fn deref_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
