use crate::error::{ConfigError, ConfigResult};
use crate::parser::IniParser;
use crate::tokenizer::{DEFAULT_DELIMITERS, Tokenizer};
use crate::types::{Record, Section};
use indexmap::IndexMap;
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Similarity threshold for "did you mean" suggestions
pub const DEFAULT_MATCH_RATIO: f64 = 0.6;

/// Main configuration model: sections in order of first appearance, each an
/// ordered sequence of records.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Records found before the first section header
    pub(crate) preamble: Vec<Record>,

    /// Sections keyed by name, in file order
    pub(crate) sections: IndexMap<String, Section>,

    /// Parser and editor options
    pub(crate) options: ConfigOptions,
}

/// What to do when a section header appears a second time while parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateSectionPolicy {
    /// Append the later block's records to the first section
    #[default]
    Merge,

    /// Drop the later block
    KeepFirst,

    /// Replace the first section's records, keeping its position
    Replace,
}

/// Configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigOptions {
    /// Comment delimiters in priority order. The first one is also the
    /// delimiter written by the serializer.
    pub comment_delimiters: Vec<String>,

    /// Minimum similarity ratio for a key to be suggested after a miss
    pub match_ratio: f64,

    /// Handling of repeated section headers
    pub duplicate_sections: DuplicateSectionPolicy,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            comment_delimiters: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
            match_ratio: DEFAULT_MATCH_RATIO,
            duplicate_sections: DuplicateSectionPolicy::default(),
        }
    }
}

impl ConfigOptions {
    pub fn with_comment_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment_delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_match_ratio(mut self, ratio: f64) -> Self {
        self.match_ratio = ratio;
        self
    }

    pub fn with_duplicate_sections(mut self, policy: DuplicateSectionPolicy) -> Self {
        self.duplicate_sections = policy;
        self
    }

    /// Delimiter used when writing comments back out
    pub fn primary_delimiter(&self) -> &str {
        self.comment_delimiters
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_DELIMITERS[0])
    }

    /// Reject option sets the parser cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.comment_delimiters.is_empty() {
            return Err(ConfigError::invalid_options(
                "at least one comment delimiter is required",
            ));
        }
        if self.comment_delimiters.iter().any(|d| d.is_empty()) {
            return Err(ConfigError::invalid_options("comment delimiters cannot be empty"));
        }
        if let Some(d) = self
            .comment_delimiters
            .iter()
            .find(|d| d.contains('=') || d.contains('[') || d.contains(']'))
        {
            return Err(ConfigError::invalid_options(format!(
                "comment delimiter '{}' collides with the file grammar",
                d
            )));
        }
        if !(0.0..=1.0).contains(&self.match_ratio) {
            return Err(ConfigError::invalid_options(format!(
                "match ratio {} is outside 0.0..=1.0",
                self.match_ratio
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Create a new empty configuration with default options
    pub fn new() -> Self {
        Self {
            preamble: Vec::new(),
            sections: IndexMap::new(),
            options: ConfigOptions::default(),
        }
    }

    /// Create a new empty configuration with custom options
    pub fn with_options(options: ConfigOptions) -> ConfigResult<Self> {
        options.validate()?;
        Ok(Self {
            preamble: Vec::new(),
            sections: IndexMap::new(),
            options,
        })
    }

    pub fn options(&self) -> &ConfigOptions {
        &self.options
    }

    /// Parse a configuration string, replacing whatever was loaded before.
    ///
    /// Parsing never fails: lines that are neither headers nor assignments
    /// become empty-key records.
    pub fn parse(&mut self, input: &str) {
        let parsed = IniParser::parse_config(input, &self.options);
        self.preamble = parsed.preamble;
        self.sections = parsed.sections;
    }

    /// Parse a configuration file, replacing whatever was loaded before
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        self.parse(&content);
        info!(path = %path.display(), sections = self.sections.len(), "loaded configuration");
        Ok(())
    }

    /// Write the serialized configuration to `path`, overwriting it
    pub fn save_as(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.serialize()).map_err(|e| ConfigError::io(path, e))?;
        info!(path = %path.display(), sections = self.sections.len(), "saved configuration");
        Ok(())
    }

    /// Tokenize a raw line with this configuration's delimiters
    pub fn tokenize(&self, line: &str) -> Record {
        Tokenizer::new(self.options.comment_delimiters.iter().cloned()).tokenize(line)
    }

    /// Records that precede the first section header
    pub fn preamble(&self) -> &[Record] {
        &self.preamble
    }

    /// Get a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Get a section by name for direct editing
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// All sections in file order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn contains_option(&self, section: &str, key: &str) -> bool {
        self.section(section).is_some_and(|s| s.contains(key))
    }

    /// First record with `key` in `section`
    pub fn get(&self, section: &str, key: &str) -> Option<&Record> {
        self.section(section)?.get(key)
    }

    /// Every record with `key` in `section`, in order
    pub fn get_all<'a>(&'a self, section: &str, key: &'a str) -> Vec<&'a Record> {
        self.section(section)
            .map(|s| s.get_all(key).collect())
            .unwrap_or_default()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.preamble.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Config {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut config = Config::new();
        config.parse(input);
        Ok(config)
    }
}
