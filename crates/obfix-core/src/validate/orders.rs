//! Incoming-orders orchestration.
//!
//! The incoming table has action-conditional rules the generic table
//! validator cannot express: the order counter and action are checked on
//! every row, but `Cancel` rows skip the detail checks entirely (a cancel
//! need not restate the order it cancels).

use time::PrimitiveDateTime;

use crate::domain::{Action, Table, TableRole};
use crate::error::{IssueKind, ValidationIssue};
use crate::validate::field::FieldRule;
use crate::validate::times;

/// Outcome of validating the incoming-orders table: every issue found, plus
/// the table with normalized (time-defaulted) rows substituted in original
/// order. Rows with issues are still normalized; issues never stop the pass.
#[derive(Debug, Clone)]
pub struct NormalizedOrders {
    pub table: Table,
    pub issues: Vec<ValidationIssue>,
}

pub fn validate_incoming_orders(table: &Table, now: PrimitiveDateTime) -> NormalizedOrders {
    let label = TableRole::IncomingOrders.label();
    let mut normalized = Table::empty(TableRole::IncomingOrders);
    let mut issues = Vec::new();

    for (index, cells) in table.rows().enumerate() {
        let row = index + 1;
        let mut cells = cells.to_vec();

        if let Some(kind) = FieldRule::OrderCounter.check(order_cell(&cells, "OrderCounter")) {
            issues.push(ValidationIssue::cell(label, row, "OrderCounter", kind));
        }

        let action_text = order_cell(&cells, "Action");
        let action = Action::from_cell(action_text);
        if action.is_none() {
            issues.push(ValidationIssue::cell(
                label,
                row,
                "Action",
                IssueKind::InvalidAction {
                    value: action_text.trim().to_owned(),
                },
            ));
        }

        if action != Some(Action::Cancel) {
            if let Some(kind) = FieldRule::Symbol.check(order_cell(&cells, "Symbol")) {
                issues.push(ValidationIssue::cell(label, row, "Symbol", kind));
            }

            let outcome = times::normalize(&cells, now);
            cells = outcome.cells;
            for time_issue in outcome.issues {
                issues.push(match time_issue.column {
                    Some(column) => ValidationIssue::cell(label, row, column, time_issue.kind),
                    None => ValidationIssue::row(label, row, time_issue.kind),
                });
            }

            for column in ["Price", "Quantity"] {
                if let Some(kind) = FieldRule::PositiveInteger.check(order_cell(&cells, column)) {
                    issues.push(ValidationIssue::cell(label, row, column, kind));
                }
            }

            if let Some(kind) = FieldRule::ParticipantId.check(order_cell(&cells, "ParticipantID"))
            {
                issues.push(ValidationIssue::cell(label, row, "ParticipantID", kind));
            }
        }

        normalized.push_cells(cells);
    }

    NormalizedOrders {
        table: normalized,
        issues,
    }
}

fn order_cell<'a>(cells: &'a [String], column: &str) -> &'a str {
    let at = TableRole::IncomingOrders
        .column_index(column)
        .expect("incoming schema column");
    &cells[at]
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    const NOW: PrimitiveDateTime = datetime!(2024-03-05 13:45:00);

    fn orders(rows: &[&[(&str, &str)]]) -> Table {
        let mut table = Table::empty(TableRole::IncomingOrders);
        for row in rows {
            table.push_record(row.iter().copied());
        }
        table
    }

    #[test]
    fn valid_add_row_is_normalized_without_issues() {
        let table = orders(&[&[
            ("OrderCounter", "1"),
            ("Action", "Add"),
            ("Symbol", "ABC"),
            ("OrderType", "Market"),
            ("Side", "Buy"),
            ("Price", "100"),
            ("Quantity", "10"),
            ("ParticipantID", "1_AB12"),
        ]]);

        let result = validate_incoming_orders(&table, NOW);

        assert!(result.issues.is_empty());
        assert_eq!(
            result.table.cell(0, "ActivateTime"),
            Some("05-03-2024/13:45:00")
        );
        assert_eq!(
            result.table.cell(0, "DeactivateTime"),
            Some("01-01-2100/00:00:00")
        );
    }

    #[test]
    fn cancel_rows_skip_detail_validation() {
        let table = orders(&[&[
            ("OrderCounter", "2"),
            ("Action", "Cancel"),
            ("Symbol", "XX"),
            ("Price", "abc"),
            ("ParticipantID", "broken"),
        ]]);

        let result = validate_incoming_orders(&table, NOW);

        assert!(result.issues.is_empty());
        // cancel rows are not time-defaulted either
        assert_eq!(result.table.cell(0, "ActivateTime"), Some("-"));
    }

    #[test]
    fn counter_and_action_are_checked_on_every_row() {
        let table = orders(&[&[("OrderCounter", "-"), ("Action", "Delete"), ("Symbol", "ABC")]]);

        let result = validate_incoming_orders(&table, NOW);

        assert_eq!(result.issues[0].column, Some("OrderCounter"));
        assert_eq!(result.issues[0].kind, IssueKind::ForbiddenPlaceholder);
        assert_eq!(result.issues[1].column, Some("Action"));
        assert_eq!(
            result.issues[1].kind,
            IssueKind::InvalidAction {
                value: String::from("Delete")
            }
        );
    }

    #[test]
    fn issues_do_not_stop_normalization_of_other_rows() {
        let table = orders(&[
            &[("OrderCounter", "-"), ("Action", "Add"), ("Symbol", "AB")],
            &[
                ("OrderCounter", "2"),
                ("Action", "Add"),
                ("Symbol", "XYZ"),
                ("Price", "5"),
                ("Quantity", "5"),
            ],
        ]);

        let result = validate_incoming_orders(&table, NOW);

        assert_eq!(result.table.len(), 2);
        // both rows still got their defaults, including the flagged one
        assert_eq!(
            result.table.cell(0, "DeactivateTime"),
            Some("01-01-2100/00:00:00")
        );
        assert_eq!(
            result.table.cell(1, "DeactivateTime"),
            Some("01-01-2100/00:00:00")
        );
        assert!(result
            .issues
            .iter()
            .any(|issue| issue.kind == IssueKind::BadSymbol && issue.row == 1));
    }

    #[test]
    fn issue_order_within_a_row_follows_the_column_checks() {
        let table = orders(&[&[
            ("OrderCounter", "x"),
            ("Action", "Modify"),
            ("Symbol", "TOOLONG"),
            ("Price", "-1"),
            ("Quantity", "0"),
            ("ParticipantID", "oops"),
        ]]);

        let result = validate_incoming_orders(&table, NOW);
        let columns: Vec<_> = result.issues.iter().map(|issue| issue.column).collect();

        assert_eq!(
            columns,
            vec![
                Some("OrderCounter"),
                Some("Symbol"),
                Some("Price"),
                Some("Quantity"),
                Some("ParticipantID"),
            ]
        );
    }
}
