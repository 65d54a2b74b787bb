use crate::tokenizer::Tokenizer;
use std::fmt;

/// One option occurrence: `key=value#comment`.
///
/// A record with an empty key and value but a non-empty comment stands for a
/// full-line comment. Records have no identity beyond their position in a
/// [`Section`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
    pub comment: String,
}

impl Record {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: comment.into(),
        }
    }

    /// A full-line comment record
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            key: String::new(),
            value: String::new(),
            comment: text.into(),
        }
    }

    /// Tokenize a raw line with the default delimiters (`#`, then `;`).
    ///
    /// ```
    /// use dupini::Record;
    ///
    /// let record = Record::from_line("Option=23424Value    #Comment");
    /// assert_eq!(record, Record::new("Option", "23424Value", "Comment"));
    /// ```
    pub fn from_line(line: &str) -> Self {
        Tokenizer::default().tokenize(line)
    }

    /// True for full-line comments
    pub fn is_comment_only(&self) -> bool {
        self.key.is_empty() && self.value.is_empty() && !self.comment.is_empty()
    }
}

impl<K, V, C> From<(K, V, C)> for Record
where
    K: Into<String>,
    V: Into<String>,
    C: Into<String>,
{
    fn from((key, value, comment): (K, V, C)) -> Self {
        Record::new(key, value, comment)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_comment_only() {
            return write!(f, "#{}", self.comment);
        }
        write!(f, "{}={}", self.key, self.value)?;
        if !self.comment.is_empty() {
            write!(f, "#{}", self.comment)?;
        }
        Ok(())
    }
}

/// A named, ordered sequence of records. Duplicate keys are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    records: Vec<Record>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn with_records(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Mutable access to the record sequence
    pub fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keys of every record in order, duplicates and blank keys included
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    /// First record with this key
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.key == key)
    }

    /// Every record with this key, in order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.iter().any(|r| r.key == key)
    }

    pub(crate) fn extend(&mut self, records: impl IntoIterator<Item = Record>) {
        self.records.extend(records);
    }

    pub(crate) fn replace_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }
}

/// Records handed to [`Config::set`](crate::Config::set) and
/// [`Config::create_option`](crate::Config::create_option): either one record
/// or an ordered batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Records {
    Single(Record),
    Batch(Vec<Record>),
}

impl Records {
    pub fn into_vec(self) -> Vec<Record> {
        match self {
            Records::Single(record) => vec![record],
            Records::Batch(records) => records,
        }
    }
}

impl From<Record> for Records {
    fn from(record: Record) -> Self {
        Records::Single(record)
    }
}

impl From<Vec<Record>> for Records {
    fn from(records: Vec<Record>) -> Self {
        Records::Batch(records)
    }
}

impl<K, V, C> From<(K, V, C)> for Records
where
    K: Into<String>,
    V: Into<String>,
    C: Into<String>,
{
    fn from(triple: (K, V, C)) -> Self {
        Records::Single(triple.into())
    }
}

impl<K, V, C> From<Vec<(K, V, C)>> for Records
where
    K: Into<String>,
    V: Into<String>,
    C: Into<String>,
{
    fn from(triples: Vec<(K, V, C)>) -> Self {
        Records::Batch(triples.into_iter().map(Record::from).collect())
    }
}

impl<K, V, C, const N: usize> From<[(K, V, C); N]> for Records
where
    K: Into<String>,
    V: Into<String>,
    C: Into<String>,
{
    fn from(triples: [(K, V, C); N]) -> Self {
        Records::Batch(triples.into_iter().map(Record::from).collect())
    }
}
