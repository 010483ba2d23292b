use chrono::NaiveDate;
use qif_rs::{DateFormat, Transaction};
use rust_decimal::Decimal;
use std::str::FromStr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let transaction = Transaction {
        date: NaiveDate::from_ymd_opt(2010, 1, 2).ok_or("bad date")?,
        amount: Some(Decimal::from_str("-10.00")?),
        name: Some("Debit".to_string()),
        description: Some("Supermarket".to_string()),
        reference: Some("abcde".to_string()),
        check_number: Some("1001".to_string()),
    };

    // The caller owns the record framing: header line plus `^` terminator.
    println!("!Type:Bank");
    println!("{}", transaction.to_qif(DateFormat::new("dd/mm/yyyy")?));
    println!("^");

    Ok(())
}
