//! Time-defaulting state machine for incoming-order rows.
//!
//! Driven by the row's OrderType: `GoodAfterTime` makes ActivateTime
//! mandatory, `GoodTillCancel`/`GoodForDay` make DeactivateTime mandatory.
//! Non-mandatory placeholders are rewritten to defaults, then every present
//! value must parse under the slash-separated lifetime format, and the
//! activation may not lie after the deactivation.
//!
//! This is a pure transform: callers get a new cell vector back, the input
//! row is never mutated in place.

use time::PrimitiveDateTime;

use crate::domain::{is_placeholder, timefmt, OrderType, TableRole, PLACEHOLDER};
use crate::error::IssueKind;

const ROLE: TableRole = TableRole::IncomingOrders;

/// An issue raised during time normalization, not yet tagged with a table.
/// Cross-field ordering issues carry no column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeIssue {
    pub column: Option<&'static str>,
    pub kind: IssueKind,
}

/// Result of normalizing one row's lifetime window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOutcome {
    pub cells: Vec<String>,
    pub issues: Vec<TimeIssue>,
}

/// Apply the defaulting and consistency rules to one incoming-orders row.
///
/// `now` is the per-run default activation instant. Defaulting and issue
/// collection happen in the same pass and independently: a row can be
/// defaulted in one field and flagged in another.
///
/// The returned cells always span the full incoming-orders schema: rows
/// shorter than the schema are padded with the placeholder first, so the
/// missing positions go through the same defaulting as explicit placeholders.
pub fn normalize(cells: &[String], now: PrimitiveDateTime) -> TimeOutcome {
    let order_type_at = ROLE
        .column_index("OrderType")
        .expect("incoming schema has OrderType");
    let activate_at = ROLE
        .column_index("ActivateTime")
        .expect("incoming schema has ActivateTime");
    let deactivate_at = ROLE
        .column_index("DeactivateTime")
        .expect("incoming schema has DeactivateTime");

    let mut cells = cells.to_vec();
    cells.resize(ROLE.columns().len(), String::from(PLACEHOLDER));
    let mut issues = Vec::new();

    let order_type = OrderType::from_cell(&cells[order_type_at]);

    if order_type == Some(OrderType::GoodAfterTime) {
        if is_placeholder(&cells[activate_at]) {
            issues.push(TimeIssue {
                column: Some("ActivateTime"),
                kind: IssueKind::RequiredForOrderType {
                    order_type: OrderType::GoodAfterTime,
                },
            });
        }
    } else if is_placeholder(&cells[activate_at]) {
        cells[activate_at] = timefmt::format_lifetime(now);
    }

    match order_type {
        Some(expiring @ (OrderType::GoodTillCancel | OrderType::GoodForDay)) => {
            if is_placeholder(&cells[deactivate_at]) {
                issues.push(TimeIssue {
                    column: Some("DeactivateTime"),
                    kind: IssueKind::RequiredForOrderType {
                        order_type: expiring,
                    },
                });
            }
        }
        _ => {
            if is_placeholder(&cells[deactivate_at]) {
                cells[deactivate_at] = String::from(timefmt::DEACTIVATE_SENTINEL);
            }
        }
    }

    let mut window = [None, None];
    for (slot, (column, index)) in [("ActivateTime", activate_at), ("DeactivateTime", deactivate_at)]
        .into_iter()
        .enumerate()
    {
        let value = &cells[index];
        if is_placeholder(value) {
            continue;
        }
        match timefmt::parse_lifetime(value) {
            Ok(parsed) => window[slot] = Some(parsed),
            Err(_) => issues.push(TimeIssue {
                column: Some(column),
                kind: IssueKind::BadDateTime {
                    pattern: timefmt::LIFETIME_PATTERN,
                },
            }),
        }
    }

    if let [Some(activate), Some(deactivate)] = window {
        if activate > deactivate {
            issues.push(TimeIssue {
                column: None,
                kind: IssueKind::ActivateAfterDeactivate,
            });
        }
    }

    TimeOutcome { cells, issues }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::Table;

    const NOW: PrimitiveDateTime = datetime!(2024-03-05 13:45:00);

    fn row(order_type: &str, activate: &str, deactivate: &str) -> Vec<String> {
        let mut table = Table::empty(TableRole::IncomingOrders);
        table.push_record([
            ("OrderType", order_type),
            ("ActivateTime", activate),
            ("DeactivateTime", deactivate),
        ]);
        let cells = table.rows().next().expect("one row").to_vec();
        cells
    }

    fn cell<'a>(cells: &'a [String], column: &str) -> &'a str {
        &cells[ROLE.column_index(column).expect("known column")]
    }

    #[test]
    fn defaults_both_times_when_order_type_carries_no_mandate() {
        let outcome = normalize(&row("Market", "-", "-"), NOW);

        assert!(outcome.issues.is_empty());
        assert_eq!(cell(&outcome.cells, "ActivateTime"), "05-03-2024/13:45:00");
        assert_eq!(
            cell(&outcome.cells, "DeactivateTime"),
            timefmt::DEACTIVATE_SENTINEL
        );
    }

    #[test]
    fn good_after_time_requires_activate_but_still_defaults_deactivate() {
        let outcome = normalize(&row("GoodAfterTime", "-", "-"), NOW);

        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].column, Some("ActivateTime"));
        assert_eq!(
            outcome.issues[0].kind,
            IssueKind::RequiredForOrderType {
                order_type: OrderType::GoodAfterTime
            }
        );
        assert_eq!(cell(&outcome.cells, "ActivateTime"), "-");
        assert_eq!(
            cell(&outcome.cells, "DeactivateTime"),
            timefmt::DEACTIVATE_SENTINEL
        );
    }

    #[test]
    fn good_till_cancel_requires_deactivate() {
        let outcome = normalize(&row("GoodTillCancel", "-", "-"), NOW);

        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].column, Some("DeactivateTime"));
        assert_eq!(
            outcome.issues[0].kind,
            IssueKind::RequiredForOrderType {
                order_type: OrderType::GoodTillCancel
            }
        );
        // activate is still defaulted in the same pass
        assert_eq!(cell(&outcome.cells, "ActivateTime"), "05-03-2024/13:45:00");
    }

    #[test]
    fn good_for_day_requires_deactivate() {
        let outcome = normalize(&row("GoodForDay", "-", "-"), NOW);

        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(
            outcome.issues[0].kind,
            IssueKind::RequiredForOrderType {
                order_type: OrderType::GoodForDay
            }
        );
    }

    #[test]
    fn present_values_must_match_the_lifetime_format() {
        let outcome = normalize(&row("Market", "01-01-2030 10:00:00", "-"), NOW);

        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].column, Some("ActivateTime"));
        assert_eq!(
            outcome.issues[0].kind,
            IssueKind::BadDateTime {
                pattern: timefmt::LIFETIME_PATTERN
            }
        );
    }

    #[test]
    fn activation_after_deactivation_is_one_ordering_issue() {
        let outcome = normalize(
            &row("Market", "02-01-2030/00:00:00", "01-01-2030/00:00:00"),
            NOW,
        );

        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].column, None);
        assert_eq!(outcome.issues[0].kind, IssueKind::ActivateAfterDeactivate);
    }

    #[test]
    fn equal_activation_and_deactivation_is_allowed() {
        let outcome = normalize(
            &row("Market", "01-01-2030/00:00:00", "01-01-2030/00:00:00"),
            NOW,
        );
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn unparseable_time_suppresses_the_ordering_check() {
        let outcome = normalize(&row("Market", "junk", "01-01-2030/00:00:00"), NOW);

        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(
            outcome.issues[0].kind,
            IssueKind::BadDateTime {
                pattern: timefmt::LIFETIME_PATTERN
            }
        );
    }

    #[test]
    fn short_rows_are_padded_to_schema_width() {
        let outcome = normalize(&[String::from("1")], NOW);

        assert_eq!(outcome.cells.len(), ROLE.columns().len());
        assert!(outcome.issues.is_empty());
        // the padded positions default like explicit placeholders
        assert_eq!(cell(&outcome.cells, "ActivateTime"), "05-03-2024/13:45:00");
        assert_eq!(
            cell(&outcome.cells, "DeactivateTime"),
            timefmt::DEACTIVATE_SENTINEL
        );
    }

    #[test]
    fn input_row_is_not_mutated() {
        let original = row("Market", "-", "-");
        let _ = normalize(&original, NOW);
        assert_eq!(cell(&original, "ActivateTime"), "-");
    }
}
