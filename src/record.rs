use chrono::NaiveDate;
use std::collections::HashMap;

/// One decoded value inside a record's field map.
///
/// Every field starts out as `Raw` text. The tokenizer upgrades the `D` slot
/// to `Date` when the value parses under the configured [`crate::DateFormat`],
/// and that variant is exactly what transaction construction checks for: a
/// `D` slot still holding `Raw` means the record is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Raw(String),
    Date(NaiveDate),
}

/// The field map of a single tokenized QIF record, keyed by field code.
///
/// Codes the transaction mapping does not recognize are kept here untouched;
/// they are only dropped when the record is turned into a
/// [`crate::Transaction`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<char, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a field code. Repeated codes are last-write-wins.
    pub fn insert(&mut self, code: char, value: FieldValue) {
        self.fields.insert(code, value);
    }

    /// The parsed date under `code`, if that slot holds the `Date` variant.
    pub fn date(&self, code: char) -> Option<NaiveDate> {
        match self.fields.get(&code) {
            Some(FieldValue::Date(date)) => Some(*date),
            _ => None,
        }
    }

    /// The raw text under `code`, if that slot holds the `Raw` variant.
    pub fn raw(&self, code: char) -> Option<&str> {
        match self.fields.get(&code) {
            Some(FieldValue::Raw(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
