//! Parse and serialize QIF (Quicken Interchange Format) transaction history.
//!
//! ```rust,ignore
//! use qif_rs::QifBuilder;
//!
//! let transactions = QifBuilder::new()
//!     .content(&file_content)
//!     .parse()?;
//! ```

mod builder;
mod date_format;
mod reader;
mod transaction;

pub mod errors;
pub mod record;

pub use builder::QifBuilder;
pub use date_format::DateFormat;
pub use errors::{QifError, QifResult};
pub use reader::Reader;
pub use transaction::Transaction;
