//! Configuration mutation API.
//!
//! Every edit is a method on [`Config`] and returns an [`EditReport`]. Edits
//! never fail: a missing section or key, or an attempt to create a section
//! that already exists, leaves the data untouched and is reported as a
//! [`Notice`] (also logged at `warn` level) so a batch of edits always runs to
//! the end.
//!
//! # Examples
//!
//! ```
//! use dupini::{Config, Notice};
//!
//! let mut config: Config = "[SystemSettings]\nMaxAnisotropy=4\n".parse().unwrap();
//!
//! let report = config.set("SystemSettings", ("MaxAnisotropy", "16", ""));
//! assert!(report.is_clean());
//! assert_eq!(config.get("SystemSettings", "MaxAnisotropy").unwrap().value, "16");
//!
//! let report = config.set("SystemSettings", ("MaxAniso", "8", ""));
//! match &report.notices()[0] {
//!     Notice::OptionNotFound { suggestions, .. } => {
//!         assert_eq!(suggestions, &vec!["MaxAnisotropy".to_string()]);
//!     }
//!     other => panic!("unexpected notice: {other}"),
//! }
//! ```

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use crate::parser::IniParser;
use crate::similarity;
use crate::types::{Record, Records, Section};
use std::fmt;
use tracing::warn;

/// Advisory message produced by an edit that could not be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The named section does not exist
    SectionNotFound {
        section: String,
        suggestions: Vec<String>,
    },

    /// The section exists but holds no record with this key
    OptionNotFound {
        section: String,
        key: String,
        suggestions: Vec<String>,
    },

    /// `create_section` was asked for a name that is already taken
    SectionExists { section: String },

    /// The section was created, but its name is not a valid header, so after
    /// saving its records will be read back as part of the section before it
    InvalidSectionName { section: String },
}

impl Notice {
    /// Similar names offered for a miss (empty when nothing is close)
    pub fn suggestions(&self) -> &[String] {
        match self {
            Notice::SectionNotFound { suggestions, .. }
            | Notice::OptionNotFound { suggestions, .. } => suggestions,
            Notice::SectionExists { .. } | Notice::InvalidSectionName { .. } => &[],
        }
    }
}

fn write_suggestions(f: &mut fmt::Formatter<'_>, kind: &str, suggestions: &[String]) -> fmt::Result {
    if suggestions.is_empty() {
        write!(f, "; no similar {}", kind)
    } else {
        write!(f, "; did you mean {}?", suggestions.join(", "))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SectionNotFound {
                section,
                suggestions,
            } => {
                write!(f, "Section {} not found, nothing changed", section)?;
                write_suggestions(f, "sections", suggestions)
            }
            Notice::OptionNotFound {
                section,
                key,
                suggestions,
            } => {
                write!(f, "Option {} in {} not found, nothing changed", key, section)?;
                write_suggestions(f, "options", suggestions)
            }
            Notice::SectionExists { section } => {
                write!(f, "Section {} already exists, section not created", section)
            }
            Notice::InvalidSectionName { section } => {
                write!(
                    f,
                    "Section {} created, but [{}] is not a valid header and will not survive a reload",
                    section, section
                )
            }
        }
    }
}

/// Outcome of one or more edits: how many records were touched and which
/// parts could not be applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReport {
    applied: usize,
    notices: Vec<Notice>,
}

impl EditReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records (or sections) changed, inserted or removed
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// True if nothing was reported
    pub fn is_clean(&self) -> bool {
        self.notices.is_empty()
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: EditReport) {
        self.applied += other.applied;
        self.notices.extend(other.notices);
    }

    /// Treat any notice as an error
    pub fn into_result(self) -> ConfigResult<usize> {
        if self.notices.is_empty() {
            Ok(self.applied)
        } else {
            Err(ConfigError::unresolved(self.notices))
        }
    }

    fn bump(&mut self, count: usize) {
        self.applied += count;
    }

    fn report(&mut self, notice: Notice) {
        warn!("{}", notice);
        self.notices.push(notice);
    }
}

impl Config {
    /// Update existing records in place.
    ///
    /// For each record, in order, the first record in `section` with the same
    /// key is replaced. An empty `value` or `comment` keeps the one already
    /// there, so `set` never blanks a field. Keys that are not present are
    /// reported with suggestions and not created.
    ///
    /// ```
    /// use dupini::{Config, Record};
    ///
    /// let mut config: Config = "[URL]\nPort=5#old\nPort=6\n".parse().unwrap();
    ///
    /// config.set("URL", ("Port", "", "note"));
    /// assert_eq!(config.get_all("URL", "Port"), vec![
    ///     &Record::new("Port", "5", "note"),
    ///     &Record::new("Port", "6", ""),
    /// ]);
    /// ```
    pub fn set(&mut self, section: &str, records: impl Into<Records>) -> EditReport {
        let mut report = EditReport::new();
        for record in records.into().into_vec() {
            self.set_record(section, record, &mut report);
        }
        report
    }

    /// Scalar form of [`Config::set`]
    pub fn set_option(&mut self, section: &str, key: &str, value: &str, comment: &str) -> EditReport {
        self.set(section, Record::new(key, value, comment))
    }

    fn set_record(&mut self, section: &str, record: Record, report: &mut EditReport) {
        let Some(target) = self.sections.get_mut(section) else {
            report.report(self.section_not_found(section));
            return;
        };

        match target.records().iter().position(|r| r.key == record.key) {
            Some(idx) => {
                let existing = &mut target.records_mut()[idx];
                if !record.value.is_empty() || existing.value.is_empty() {
                    existing.value = record.value;
                }
                if !record.comment.is_empty() || existing.comment.is_empty() {
                    existing.comment = record.comment;
                }
                report.bump(1);
            }
            None => {
                let notice = option_not_found(target, &record.key, self.options.match_ratio);
                report.report(notice);
            }
        }
    }

    /// Insert records at `index`, shifting later records back.
    ///
    /// An index past the end appends. Duplicates are never checked. A batch is
    /// inserted one record at a time at the same fixed index, so within
    /// bounds the batch ends up in reverse order:
    ///
    /// ```
    /// use dupini::Config;
    ///
    /// let mut config: Config = "[URL]\nPort=7777\n".parse().unwrap();
    /// config.create_option("URL", vec![("A", "1", ""), ("B", "2", "")], 0);
    /// assert_eq!(config.section("URL").unwrap().keys().collect::<Vec<_>>(), vec!["B", "A", "Port"]);
    ///
    /// config.create_option("URL", vec![("C", "3", ""), ("D", "4", "")], 99);
    /// assert_eq!(config.section("URL").unwrap().keys().collect::<Vec<_>>(), vec!["B", "A", "Port", "C", "D"]);
    /// ```
    pub fn create_option(
        &mut self,
        section: &str,
        records: impl Into<Records>,
        index: usize,
    ) -> EditReport {
        let mut report = EditReport::new();
        let Some(target) = self.sections.get_mut(section) else {
            report.report(self.section_not_found(section));
            return report;
        };

        for record in records.into().into_vec() {
            let at = index.min(target.len());
            target.records_mut().insert(at, record);
            report.bump(1);
        }
        report
    }

    /// Add a section at the end. An existing section with the same name is
    /// left alone and the call is reported. A name that cannot be written as
    /// a header is still added, with an [`Notice::InvalidSectionName`].
    pub fn create_section(
        &mut self,
        name: &str,
        records: impl IntoIterator<Item = Record>,
    ) -> EditReport {
        let mut report = EditReport::new();
        if self.sections.contains_key(name) {
            report.report(Notice::SectionExists {
                section: name.to_string(),
            });
            return report;
        }

        let section = Section::with_records(name, records.into_iter().collect());
        self.sections.insert(name.to_string(), section);
        report.bump(1);

        if !IniParser::is_section_header(&format!("[{}]", name)) {
            report.report(Notice::InvalidSectionName {
                section: name.to_string(),
            });
        }
        report
    }

    /// Remove the first record with `key`, or every one of them when
    /// `all_occurrences` is set. The remaining records keep their order.
    pub fn delete(&mut self, section: &str, key: &str, all_occurrences: bool) -> EditReport {
        let mut report = EditReport::new();
        let Some(target) = self.sections.get_mut(section) else {
            report.report(self.section_not_found(section));
            return report;
        };

        let removed = if all_occurrences {
            let before = target.len();
            target.records_mut().retain(|r| r.key != key);
            before - target.len()
        } else {
            match target.records().iter().position(|r| r.key == key) {
                Some(idx) => {
                    target.records_mut().remove(idx);
                    1
                }
                None => 0,
            }
        };

        if removed == 0 {
            let notice = option_not_found(target, key, self.options.match_ratio);
            report.report(notice);
        } else {
            report.bump(removed);
        }
        report
    }

    /// Remove a whole section. The other sections keep their order.
    pub fn remove_section(&mut self, name: &str) -> EditReport {
        let mut report = EditReport::new();
        match self.sections.shift_remove(name) {
            Some(_) => report.bump(1),
            None => report.report(self.section_not_found(name)),
        }
        report
    }

    /// Assign `values` to successive records with `key`.
    ///
    /// The first `offset` matches are skipped; each following match gets the
    /// next value until `values` runs out. Comments are kept. A key that does
    /// not occur in the section is reported and nothing changes.
    ///
    /// ```
    /// use dupini::Config;
    ///
    /// let mut config: Config = "[Engine.Engine]\nC=1\nC=2\nC=3\n".parse().unwrap();
    /// config.set_multiple_options("Engine.Engine", "C", &["a", "b"], 1);
    ///
    /// let values: Vec<_> = config.get_all("Engine.Engine", "C").iter().map(|r| r.value.as_str()).collect();
    /// assert_eq!(values, vec!["1", "a", "b"]);
    /// ```
    pub fn set_multiple_options<S: AsRef<str>>(
        &mut self,
        section: &str,
        key: &str,
        values: &[S],
        offset: usize,
    ) -> EditReport {
        let mut report = EditReport::new();
        let Some(target) = self.sections.get_mut(section) else {
            report.report(self.section_not_found(section));
            return report;
        };

        if !target.contains(key) {
            let notice = option_not_found(target, key, self.options.match_ratio);
            report.report(notice);
            return report;
        }

        let matches = target
            .records_mut()
            .iter_mut()
            .filter(|r| r.key == key)
            .skip(offset);
        for (record, value) in matches.zip(values) {
            record.value = value.as_ref().to_string();
            report.bump(1);
        }
        report
    }

    fn section_not_found(&self, section: &str) -> Notice {
        Notice::SectionNotFound {
            section: section.to_string(),
            suggestions: similarity::suggest(
                section,
                self.section_names(),
                self.options.match_ratio,
            ),
        }
    }
}

fn option_not_found(section: &Section, key: &str, threshold: f64) -> Notice {
    Notice::OptionNotFound {
        section: section.name().to_string(),
        key: key.to_string(),
        suggestions: similarity::suggest(key, section.keys().filter(|k| !k.is_empty()), threshold),
    }
}
