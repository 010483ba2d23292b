use crate::date_format::DateFormat;
use crate::record::Record;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Serialization order of the QIF field codes.
const FIELD_CODES: [char; 6] = ['D', 'T', 'L', 'M', 'P', 'N'];

/// One bank or credit card transaction from a QIF record.
///
/// A transaction only exists with a real date: record decoding produces no
/// transaction at all when the `D` field did not parse. Everything else is
/// optional. `check_number` stays a string because QIF files carry
/// non-numeric markers like `ATM` in the `N` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Option<Decimal>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub check_number: Option<String>,
}

impl Transaction {
    /// Build a transaction from a tokenized record.
    ///
    /// Returns `None` unless the `D` slot holds a parsed date. Missing field
    /// codes map to `None`, as does a `T` value that is not a decimal number.
    /// Codes outside `D,T,L,M,P,N` are dropped here.
    pub fn read(record: &Record) -> Option<Self> {
        let date = record.date('D')?;

        Some(Transaction {
            date,
            amount: record.raw('T').and_then(|v| v.parse().ok()),
            name: record.raw('L').map(str::to_string),
            description: record.raw('M').map(str::to_string),
            reference: record.raw('P').map(str::to_string),
            check_number: record.raw('N').map(str::to_string),
        })
    }

    /// Render the transaction as its QIF field-line block.
    ///
    /// Lines come out in the fixed order `D,T,L,M,P,N`, each as the field
    /// code immediately followed by the value, newline-joined. Absent fields
    /// render as the bare code. The `^` record terminator and any `!` header
    /// framing are the caller's responsibility.
    pub fn to_qif(&self, format: DateFormat) -> String {
        FIELD_CODES
            .iter()
            .map(|&code| format!("{}{}", code, self.field(code, format)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn field(&self, code: char, format: DateFormat) -> String {
        let opt = |value: &Option<String>| value.clone().unwrap_or_default();
        match code {
            'D' => format.format(self.date),
            'T' => self.amount.map(|a| a.to_string()).unwrap_or_default(),
            'L' => opt(&self.name),
            'M' => opt(&self.description),
            'P' => opt(&self.reference),
            'N' => opt(&self.check_number),
            _ => unreachable!("unknown field code {code}"),
        }
    }
}
