// Shared helpers for obfix behavioral tests
pub use obfix_core::{
    format_table, is_placeholder, Action, Fixture, IssueKind, OrderType, Submission, Table,
    TableRole, ValidationIssue,
};

use time::macros::datetime;
use time::PrimitiveDateTime;

/// Fixed "now" so defaulted activation times are deterministic in tests.
pub const FIXED_NOW: PrimitiveDateTime = datetime!(2024-03-05 13:45:00);
pub const FIXED_NOW_TEXT: &str = "05-03-2024/13:45:00";

/// A submission with one well-formed Add order and everything else empty.
pub fn minimal_submission(test_name: &str) -> Submission {
    let mut submission = Submission::new(test_name, 3, 100);
    submission.incoming_orders.push_record([
        ("OrderCounter", "1"),
        ("Action", "Add"),
        ("Symbol", "ABC"),
        ("OrderType", "Market"),
        ("Side", "Buy"),
        ("Price", "100"),
        ("Quantity", "10"),
        ("ActivateTime", "-"),
        ("DeactivateTime", "-"),
        ("ParticipantID", "1_AB12"),
    ]);
    submission
}
