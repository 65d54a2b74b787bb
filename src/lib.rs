//! # dupini
//!
//! An editor for sectioned `key=value` configuration files in which a key may
//! repeat inside a section, such as Unreal Engine 3 `.ini` files.
//!
//! Each section is kept as an ordered sequence of `(key, value, comment)`
//! records rather than a map, so loading, editing and saving a file preserves:
//!
//! - the order of sections,
//! - the order and multiplicity of options within a section,
//! - the trailing comment attached to each option occurrence.
//!
//! ## Features
//!
//! - **Duplicate keys**: every occurrence is a separate [`Record`]
//! - **Comments**: full-line and trailing, `#` and `;` by default
//! - **First-match edits**: [`Config::set`] updates the first occurrence only
//! - **Bulk edits**: [`Config::set_multiple_options`] walks every occurrence
//! - **Advisory misses**: unknown keys and sections produce an [`EditReport`]
//!   with "did you mean" suggestions instead of an error
//! - **File handle**: [`ConfigFile`] remembers where a file came from
//!
//! ## Example
//!
//! ```rust
//! use dupini::Config;
//!
//! let mut config: Config = r#"
//! [SystemSettings]
//! MaxAnisotropy=4 ; texture filtering
//! bUseMaxQualityMode=False
//!
//! [Engine.Engine]
//! LightComplexityColors=(R=0,G=0,B=0,A=1)
//! LightComplexityColors=(R=0,G=255,B=0,A=1)
//! "#
//! .parse()
//! .unwrap();
//!
//! config.set("SystemSettings", [
//!     ("MaxAnisotropy", "16", ""),
//!     ("bUseMaxQualityMode", "True", ""),
//! ]);
//! config.set_multiple_options("Engine.Engine", "LightComplexityColors", &["(R=1,G=1,B=1,A=1)"], 1);
//!
//! assert_eq!(config.get("SystemSettings", "MaxAnisotropy").unwrap().comment, " texture filtering");
//! assert_eq!(
//!     config.serialize(),
//!     "[SystemSettings]\n\
//!      MaxAnisotropy=16# texture filtering\n\
//!      bUseMaxQualityMode=True\n\
//!      \n\
//!      [Engine.Engine]\n\
//!      LightComplexityColors=(R=0,G=0,B=0,A=1)\n\
//!      LightComplexityColors=(R=1,G=1,B=1,A=1)\n\
//!      \n"
//! );
//! ```

// Module declarations
mod config;
mod error;
mod file;
mod mutation;
mod parser;
mod serializer;
mod tokenizer;
mod types;

pub mod similarity;

// Public API exports
pub use config::{Config, ConfigOptions, DEFAULT_MATCH_RATIO, DuplicateSectionPolicy};
pub use error::{ConfigError, ConfigResult};
pub use file::ConfigFile;
pub use mutation::{EditReport, Notice};
pub use parser::{IniParser, ParsedConfig, normalize_lines};
pub use tokenizer::{DEFAULT_DELIMITERS, Tokenizer};
pub use types::{Record, Records, Section};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
