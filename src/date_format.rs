use crate::errors::QifError;
use chrono::NaiveDate;

/// Component ordering of a QIF date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    DayFirst,
    MonthFirst,
}

/// Translates between QIF date text and `NaiveDate` values.
///
/// QIF files carry dates in one of two locale-ambiguous orderings, selected
/// by a pattern token:
///
/// - `"dd/mm/yyyy"` — day first (the default)
/// - `"mm/dd/yyyy"` — month first
///
/// Any other pattern is rejected at construction. The ordering fully
/// determines both parse and format behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    order: DateOrder,
}

impl DateFormat {
    pub fn new(pattern: &str) -> Result<Self, QifError> {
        let order = match pattern {
            "dd/mm/yyyy" => DateOrder::DayFirst,
            "mm/dd/yyyy" => DateOrder::MonthFirst,
            other => return Err(QifError::UnsupportedDateFormat(other.to_string())),
        };
        Ok(Self { order })
    }

    /// Parse a date string under this ordering.
    ///
    /// The text must decompose into exactly three numeric components on
    /// non-digit separators, and those components must form a real calendar
    /// date. Anything else returns `None` — an unparseable date is how a
    /// record gets rejected, not an error.
    ///
    /// Two-digit years expand with the POSIX `%y` pivot: 00-68 land in the
    /// 2000s, 69-99 in the 1900s.
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let parts: Vec<&str> = text
            .trim()
            .split(|c: char| !c.is_ascii_digit())
            .filter(|p| !p.is_empty())
            .collect();
        let [first, second, year] = parts.as_slice() else {
            return None;
        };

        let first: u32 = first.parse().ok()?;
        let second: u32 = second.parse().ok()?;
        let year = expand_year(year)?;

        let (day, month) = match self.order {
            DateOrder::DayFirst => (first, second),
            DateOrder::MonthFirst => (second, first),
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Render a date back to QIF text under this ordering, zero-padded and
    /// `/`-separated.
    pub fn format(&self, date: NaiveDate) -> String {
        let pattern = match self.order {
            DateOrder::DayFirst => "%d/%m/%Y",
            DateOrder::MonthFirst => "%m/%d/%Y",
        };
        date.format(pattern).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            order: DateOrder::DayFirst,
        }
    }
}

fn expand_year(token: &str) -> Option<i32> {
    let year: i32 = token.parse().ok()?;
    if token.len() > 2 {
        return Some(year);
    }
    if year <= 68 {
        Some(2000 + year)
    } else {
        Some(1900 + year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("dd/mm/yyyy")]
    #[case("mm/dd/yyyy")]
    fn test_new_accepts_supported_patterns(#[case] pattern: &str) {
        assert!(DateFormat::new(pattern).is_ok());
    }

    #[rstest]
    #[case("yyyy/mm/dd")]
    #[case("dd-mm-yyyy")]
    #[case("DD/MM/YYYY")]
    #[case("")]
    fn test_new_rejects_unsupported_patterns(#[case] pattern: &str) {
        let result = DateFormat::new(pattern);
        assert!(matches!(
            result.unwrap_err(),
            QifError::UnsupportedDateFormat(_)
        ));
    }

    #[test]
    fn test_default_is_day_first() {
        assert_eq!(DateFormat::default(), DateFormat::new("dd/mm/yyyy").unwrap());
    }

    #[rstest]
    #[case("02/01/2010", 2010, 1, 2)]
    #[case("31/12/2025", 2025, 12, 31)]
    #[case("1/2/2010", 2010, 2, 1)]
    #[case("02-01-2010", 2010, 1, 2)]
    #[case("  02/01/2010  ", 2010, 1, 2)]
    fn test_parse_day_first(
        #[case] text: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let format = DateFormat::new("dd/mm/yyyy").unwrap();
        assert_eq!(
            format.parse(text),
            Some(NaiveDate::from_ymd_opt(year, month, day).unwrap())
        );
    }

    #[rstest]
    #[case("01/02/2010", 2010, 1, 2)]
    #[case("12/31/2025", 2025, 12, 31)]
    fn test_parse_month_first(
        #[case] text: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let format = DateFormat::new("mm/dd/yyyy").unwrap();
        assert_eq!(
            format.parse(text),
            Some(NaiveDate::from_ymd_opt(year, month, day).unwrap())
        );
    }

    // Pivot rule: 00-68 expand to 20xx, 69-99 to 19xx.
    #[rstest]
    #[case("02/01/00", 2000)]
    #[case("02/01/68", 2068)]
    #[case("02/01/69", 1969)]
    #[case("02/01/99", 1999)]
    fn test_parse_two_digit_year_pivot(#[case] text: &str, #[case] year: i32) {
        let format = DateFormat::new("dd/mm/yyyy").unwrap();
        assert_eq!(
            format.parse(text),
            Some(NaiveDate::from_ymd_opt(year, 1, 2).unwrap())
        );
    }

    #[rstest]
    #[case("32/01/2010")] // no such day
    #[case("01/13/2010")] // no such month
    #[case("29/02/2025")] // not a leap year
    #[case("02/01")] // too few components
    #[case("02/01/01/2010")] // too many components
    #[case("hello")]
    #[case("")]
    fn test_parse_invalid_returns_none(#[case] text: &str) {
        let format = DateFormat::new("dd/mm/yyyy").unwrap();
        assert_eq!(format.parse(text), None);
    }

    #[test]
    fn test_parse_is_order_sensitive() {
        let day_first = DateFormat::new("dd/mm/yyyy").unwrap();
        let month_first = DateFormat::new("mm/dd/yyyy").unwrap();

        let text = "02/01/2010";
        assert_eq!(
            day_first.parse(text),
            Some(NaiveDate::from_ymd_opt(2010, 1, 2).unwrap())
        );
        assert_eq!(
            month_first.parse(text),
            Some(NaiveDate::from_ymd_opt(2010, 2, 1).unwrap())
        );
    }

    #[rstest]
    #[case("dd/mm/yyyy", "02/01/2010")]
    #[case("mm/dd/yyyy", "01/02/2010")]
    fn test_format(#[case] pattern: &str, #[case] expected: &str) {
        let format = DateFormat::new(pattern).unwrap();
        let date = NaiveDate::from_ymd_opt(2010, 1, 2).unwrap();
        assert_eq!(format.format(date), expected);
    }

    #[test]
    fn test_format_zero_pads() {
        let format = DateFormat::new("dd/mm/yyyy").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format.format(date), "07/03/2025");
    }

    #[rstest]
    #[case("dd/mm/yyyy")]
    #[case("mm/dd/yyyy")]
    fn test_format_then_parse_round_trips(#[case] pattern: &str) {
        let format = DateFormat::new(pattern).unwrap();
        let date = NaiveDate::from_ymd_opt(2010, 1, 2).unwrap();
        assert_eq!(format.parse(&format.format(date)), Some(date));
    }
}
