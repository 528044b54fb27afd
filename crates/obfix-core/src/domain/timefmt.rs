//! The two date-time formats used by the fixture pipeline.
//!
//! The report format (space-separated) belongs to the generic date validator;
//! the lifetime format (slash-separated) is specific to the ActivateTime and
//! DeactivateTime columns. They stay distinct named constants on purpose.

use time::error::Parse;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// `DD-MM-YYYY HH:MM:SS`
pub const REPORT: &[BorrowedFormatItem<'static>] =
    format_description!("[day]-[month]-[year] [hour]:[minute]:[second]");

/// `DD-MM-YYYY/HH:MM:SS`
pub const LIFETIME: &[BorrowedFormatItem<'static>] =
    format_description!("[day]-[month]-[year]/[hour]:[minute]:[second]");

/// Human-readable pattern names used in issue messages.
pub const REPORT_PATTERN: &str = "DD-MM-YYYY HH:MM:SS";
pub const LIFETIME_PATTERN: &str = "DD-MM-YYYY/HH:MM:SS";

/// Far-future DeactivateTime sentinel applied when no expiry is given.
pub const DEACTIVATE_SENTINEL: &str = "01-01-2100/00:00:00";

pub fn parse_report(value: &str) -> Result<PrimitiveDateTime, Parse> {
    PrimitiveDateTime::parse(value, REPORT)
}

pub fn parse_lifetime(value: &str) -> Result<PrimitiveDateTime, Parse> {
    PrimitiveDateTime::parse(value, LIFETIME)
}

pub fn format_lifetime(moment: PrimitiveDateTime) -> String {
    moment
        .format(LIFETIME)
        .expect("lifetime format must be formattable")
}

/// Current wall-clock instant, without an offset. Computed once per
/// validation run, never at load time.
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}
