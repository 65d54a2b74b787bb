use crate::config::{ConfigOptions, DuplicateSectionPolicy};
use crate::tokenizer::Tokenizer;
use crate::types::{Record, Section};
use indexmap::IndexMap;
use pest::Parser;
use pest_derive::Parser;
use tracing::debug;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct IniParser;

/// Parse result: records before the first header plus the sections in order
#[derive(Debug, Default)]
pub struct ParsedConfig {
    pub preamble: Vec<Record>,
    pub sections: IndexMap<String, Section>,
}

/// Trim every line and drop the blank ones
pub fn normalize_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

impl IniParser {
    /// Parse a configuration string
    pub fn parse_config(input: &str, options: &ConfigOptions) -> ParsedConfig {
        let tokenizer = Tokenizer::new(options.comment_delimiters.iter().cloned());
        let mut parsed = ParsedConfig::default();
        let mut current: Option<(String, Vec<Record>)> = None;

        for line in normalize_lines(input) {
            // Headers may carry a trailing comment, which is dropped
            let (content, _) = tokenizer.strip_comment(line);
            if let Some(name) = Self::section_name(content) {
                if let Some((open, records)) = current.take() {
                    Self::commit(&mut parsed.sections, open, records, options.duplicate_sections);
                }
                debug!(section = name, "opened section");
                current = Some((name.to_string(), Vec::new()));
                continue;
            }

            let record = tokenizer.tokenize(line);
            match current.as_mut() {
                Some((_, records)) => records.push(record),
                None => parsed.preamble.push(record),
            }
        }

        if let Some((open, records)) = current.take() {
            Self::commit(&mut parsed.sections, open, records, options.duplicate_sections);
        }

        if !parsed.preamble.is_empty() {
            debug!(
                records = parsed.preamble.len(),
                "kept records found before the first section header"
            );
        }

        parsed
    }

    /// Name inside a `[Name]` or `[Name.Sub]` header, if the line is one
    pub fn section_name(line: &str) -> Option<&str> {
        let header = IniParser::parse(Rule::section_header, line).ok()?.next()?;
        header
            .into_inner()
            .find(|pair| pair.as_rule() == Rule::section_name)
            .map(|pair| pair.as_str())
    }

    /// True if the whole line is a section header
    pub fn is_section_header(line: &str) -> bool {
        Self::section_name(line).is_some()
    }

    /// Split a comment-free line at its first `=` (untrimmed halves)
    pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
        let assignment = IniParser::parse(Rule::assignment, line).ok()?.next()?;
        let mut key = None;
        let mut value = None;
        for pair in assignment.into_inner() {
            match pair.as_rule() {
                Rule::key => key = Some(pair.as_str()),
                Rule::value => value = Some(pair.as_str()),
                _ => {}
            }
        }
        Some((key?, value?))
    }

    fn commit(
        sections: &mut IndexMap<String, Section>,
        name: String,
        records: Vec<Record>,
        policy: DuplicateSectionPolicy,
    ) {
        match sections.get_mut(&name) {
            None => {
                let section = Section::with_records(name.clone(), records);
                sections.insert(name, section);
            }
            Some(existing) => {
                debug!(section = %name, ?policy, "duplicate section header");
                match policy {
                    DuplicateSectionPolicy::Merge => existing.extend(records),
                    DuplicateSectionPolicy::KeepFirst => {}
                    DuplicateSectionPolicy::Replace => existing.replace_records(records),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ParsedConfig {
        IniParser::parse_config(input, &ConfigOptions::default())
    }

    #[test]
    fn test_normalize_lines() {
        let lines: Vec<_> = normalize_lines("  [URL]  \n\n   \r\nPort=7777\r\n").collect();
        assert_eq!(lines, vec!["[URL]", "Port=7777"]);
    }

    #[test]
    fn test_section_name() {
        assert_eq!(IniParser::section_name("[URL]"), Some("URL"));
        assert_eq!(IniParser::section_name("[Engine.Engine]"), Some("Engine.Engine"));
        assert_eq!(IniParser::section_name("[Engine.Engine.Extra]"), None);
        assert_eq!(IniParser::section_name("[IpDrv.TcpNetDriver]"), Some("IpDrv.TcpNetDriver"));
        assert_eq!(IniParser::section_name("[Two Words]"), None);
        assert_eq!(IniParser::section_name("[Core2]"), None);
        assert_eq!(IniParser::section_name("[URL] trailing"), None);
        assert_eq!(IniParser::section_name("[]"), None);
        assert_eq!(IniParser::section_name("Port=7777"), None);
    }

    #[test]
    fn test_split_assignment() {
        assert_eq!(IniParser::split_assignment("a=b"), Some(("a", "b")));
        assert_eq!(IniParser::split_assignment("a = b=c"), Some(("a ", " b=c")));
        assert_eq!(IniParser::split_assignment("a="), Some(("a", "")));
        assert_eq!(IniParser::split_assignment("=b"), Some(("", "b")));
        assert_eq!(IniParser::split_assignment("no equals"), None);
        assert_eq!(IniParser::split_assignment(""), None);
    }

    #[test]
    fn test_sections_keep_order_and_duplicates() {
        let parsed = parse(
            "[URL]\nPort=7777\nPeerPort=7778\n\n[Engine.Engine]\nColor=1\nColor=2\n",
        );
        let names: Vec<_> = parsed.sections.keys().cloned().collect();
        assert_eq!(names, vec!["URL", "Engine.Engine"]);

        let engine = &parsed.sections["Engine.Engine"];
        assert_eq!(
            engine.records(),
            &[Record::new("Color", "1", ""), Record::new("Color", "2", "")]
        );
    }

    #[test]
    fn test_trailing_empty_section() {
        let parsed = parse("[URL]\nPort=7777\n[Empty]\n");
        assert!(parsed.sections["Empty"].is_empty());
    }

    #[test]
    fn test_adjacent_headers_make_empty_section() {
        let parsed = parse("[First]\n[Second]\nKey=1\n");
        assert!(parsed.sections["First"].is_empty());
        assert_eq!(parsed.sections["Second"].len(), 1);
    }

    #[test]
    fn test_preamble_records() {
        let parsed = parse("; top of file\nLoose=1\n[URL]\nPort=7777\n");
        assert_eq!(
            parsed.preamble,
            vec![Record::comment(" top of file"), Record::new("Loose", "1", "")]
        );
        assert_eq!(parsed.sections.len(), 1);
    }

    #[test]
    fn test_malformed_header_is_content() {
        let parsed = parse("[URL]\n[Not A Header]\nPort=7777\n");
        assert_eq!(parsed.sections.len(), 1);
        assert_eq!(
            parsed.sections["URL"].records(),
            &[Record::default(), Record::new("Port", "7777", "")]
        );
    }

    #[test]
    fn test_duplicate_header_policies() {
        let input = "[A]\nx=1\n[B]\ny=1\n[A]\nx=2\n";

        let merged = parse(input);
        assert_eq!(merged.sections.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(
            merged.sections["A"].records(),
            &[Record::new("x", "1", ""), Record::new("x", "2", "")]
        );

        let first = IniParser::parse_config(
            input,
            &ConfigOptions::default().with_duplicate_sections(DuplicateSectionPolicy::KeepFirst),
        );
        assert_eq!(first.sections["A"].records(), &[Record::new("x", "1", "")]);

        let replaced = IniParser::parse_config(
            input,
            &ConfigOptions::default().with_duplicate_sections(DuplicateSectionPolicy::Replace),
        );
        assert_eq!(replaced.sections["A"].records(), &[Record::new("x", "2", "")]);
        assert_eq!(replaced.sections.get_index_of("A"), Some(0));
    }
}
