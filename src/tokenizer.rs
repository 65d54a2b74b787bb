//! Turns one configuration line into a [`Record`].

use crate::parser::IniParser;
use crate::types::Record;

/// Default comment delimiters, highest priority first
pub const DEFAULT_DELIMITERS: [&str; 2] = ["#", ";"];

/// Splits a line into key, value and comment.
///
/// Delimiters are checked in priority order and the first one present in the
/// line wins; any other delimiter types on that line stay part of the value.
/// There is no escaping, so a delimiter inside a value still starts a comment.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiters: Vec<String>,
}

impl Tokenizer {
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            delimiters: delimiters
                .into_iter()
                .map(Into::into)
                .filter(|d: &String| !d.is_empty())
                .collect(),
        }
    }

    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Tokenize one line. Never fails: a line without `=` becomes a record
    /// with an empty key and value, keeping whatever comment it had.
    ///
    /// ```
    /// use dupini::{Record, Tokenizer};
    ///
    /// let tokenizer = Tokenizer::default();
    /// assert_eq!(tokenizer.tokenize("Option=2222;Comment"), Record::new("Option", "2222", "Comment"));
    /// assert_eq!(tokenizer.tokenize("; just a note"), Record::comment(" just a note"));
    /// assert_eq!(tokenizer.tokenize("garbage"), Record::default());
    /// ```
    pub fn tokenize(&self, line: &str) -> Record {
        let (working, comment) = self.strip_comment(line);
        let comment = comment.unwrap_or_default().to_string();

        match IniParser::split_assignment(working) {
            Some((key, value)) => Record {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
                comment,
            },
            None => Record {
                key: String::new(),
                value: String::new(),
                comment,
            },
        }
    }
}

impl Tokenizer {
    /// Cut the comment off a line: the trimmed content before the winning
    /// delimiter, and the text after it (delimiter removed, not trimmed).
    pub fn strip_comment<'a>(&self, line: &'a str) -> (&'a str, Option<&'a str>) {
        let line = line.trim();
        let found = self
            .delimiters
            .iter()
            .find_map(|d| line.find(d.as_str()).map(|idx| (d.len(), idx)));

        match found {
            Some((delimiter_len, idx)) => (line[..idx].trim(), Some(&line[idx + delimiter_len..])),
            None => (line, None),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITERS)
    }
}
