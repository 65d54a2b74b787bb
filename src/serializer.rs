//! Rendering a [`Config`] back to the file grammar.
//!
//! Output layout: preamble records (if any) and a blank line, then for each
//! section its `[name]` header, one line per record and a blank line. Comments
//! are always written with the primary delimiter, so `;` comments come back
//! as `#` comments under the default options.

use crate::config::Config;
use crate::types::Record;
use std::fmt;

impl Config {
    /// Serialize the configuration to a string
    pub fn serialize(&self) -> String {
        let mut output = String::new();
        let delimiter = self.options.primary_delimiter();

        if !self.preamble.is_empty() {
            serialize_records(&self.preamble, delimiter, &mut output);
            output.push('\n');
        }

        for section in self.sections.values() {
            output.push('[');
            output.push_str(section.name());
            output.push_str("]\n");
            serialize_records(section.records(), delimiter, &mut output);
            output.push('\n');
        }

        output
    }
}

fn serialize_records(records: &[Record], delimiter: &str, output: &mut String) {
    for record in records {
        if record.is_comment_only() {
            output.push_str(delimiter);
            output.push_str(&record.comment);
            output.push('\n');
            continue;
        }

        output.push_str(&record.key);
        output.push('=');
        output.push_str(&record.value);
        if !record.comment.is_empty() {
            output.push_str(delimiter);
            output.push_str(&record.comment);
        }
        output.push('\n');
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
