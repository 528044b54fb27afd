//! Per-field validation rules.
//!
//! Each rule is a total predicate over the cell text: it either accepts the
//! value or names the reason it is unacceptable. Except for `OrderCounter`,
//! every rule treats the placeholder as valid; "not specified" is handled by
//! the defaulting policies, not here.

use crate::domain::{is_placeholder, timefmt};
use crate::error::IssueKind;

/// The validation rule vocabulary, dispatched per column by table schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// String of decimal digits with value > 0, or placeholder.
    PositiveInteger,
    /// Report-format date `DD-MM-YYYY HH:MM:SS`, or placeholder.
    ReportDateTime,
    /// `<digits>_<exactly 4 alphanumeric>`, or placeholder.
    ParticipantId,
    /// Exactly 3 letters after trimming, or placeholder.
    Symbol,
    /// Positive integer; never placeholder-exempt. Blank is "required",
    /// a literal `-` is rejected with a distinct message.
    OrderCounter,
}

impl FieldRule {
    pub fn check(self, value: &str) -> Option<IssueKind> {
        match self {
            Self::PositiveInteger => check_positive_integer(value),
            Self::ReportDateTime => check_report_datetime(value),
            Self::ParticipantId => check_participant_id(value),
            Self::Symbol => check_symbol(value),
            Self::OrderCounter => check_order_counter(value),
        }
    }
}

fn check_positive_integer(value: &str) -> Option<IssueKind> {
    if is_placeholder(value) {
        return None;
    }

    if is_positive_integer(value) {
        None
    } else {
        Some(IssueKind::NotPositiveInteger)
    }
}

fn check_report_datetime(value: &str) -> Option<IssueKind> {
    if is_placeholder(value) {
        return None;
    }

    if timefmt::parse_report(value).is_ok() {
        None
    } else {
        Some(IssueKind::BadDateTime {
            pattern: timefmt::REPORT_PATTERN,
        })
    }
}

fn check_participant_id(value: &str) -> Option<IssueKind> {
    if is_placeholder(value) {
        return None;
    }

    let valid = value.split_once('_').is_some_and(|(digits, suffix)| {
        !digits.is_empty()
            && digits.chars().all(|ch| ch.is_ascii_digit())
            && suffix.len() == 4
            && suffix.chars().all(|ch| ch.is_ascii_alphanumeric())
    });

    if valid {
        None
    } else {
        Some(IssueKind::BadParticipantId)
    }
}

fn check_symbol(value: &str) -> Option<IssueKind> {
    if is_placeholder(value) {
        return None;
    }

    let trimmed = value.trim();
    let valid = trimmed.chars().count() == 3 && trimmed.chars().all(char::is_alphabetic);

    if valid {
        None
    } else {
        Some(IssueKind::BadSymbol)
    }
}

fn check_order_counter(value: &str) -> Option<IssueKind> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "nan" {
        return Some(IssueKind::Required);
    }
    if trimmed == "-" {
        return Some(IssueKind::ForbiddenPlaceholder);
    }

    if is_positive_integer(value) {
        None
    } else {
        Some(IssueKind::CounterNotPositiveInteger)
    }
}

/// All decimal digits and at least one of them non-zero. Digit-only avoids
/// accepting signs or whitespace; the non-zero scan sidesteps integer width
/// limits for absurdly long inputs.
fn is_positive_integer(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|ch| ch.is_ascii_digit())
        && value.chars().any(|ch| ch != '0')
}
