//! Submission JSON decoding.
//!
//! The grid collaborator is replaced here by a JSON document: six tables as
//! arrays of objects keyed by column name, plus the two thresholds and the
//! test name. Cell values are scalars of unknown origin type; everything is
//! rendered to its textual representation before validation, with JSON null
//! standing in for the placeholder.

use std::fs;
use std::path::Path;

use obfix_core::{Submission, Table, TableRole};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::CliError;

type Record = Map<String, Value>;

#[derive(Debug, Deserialize)]
pub struct SubmissionFile {
    pub test_name: String,

    #[serde(default = "default_pending_order_threshold")]
    pub pending_order_threshold: u64,

    #[serde(default = "default_pending_duration_threshold")]
    pub pending_duration_threshold: u64,

    #[serde(default)]
    pub incoming_orders: Vec<Record>,
    #[serde(default)]
    pub preprocessor_bids: Vec<Record>,
    #[serde(default)]
    pub preprocessor_asks: Vec<Record>,
    #[serde(default)]
    pub orderbook_bids: Vec<Record>,
    #[serde(default)]
    pub orderbook_asks: Vec<Record>,
    #[serde(default)]
    pub trades: Vec<Record>,
}

// The grid UI this replaces seeded the threshold inputs with 3 and 100.
const fn default_pending_order_threshold() -> u64 {
    3
}

const fn default_pending_duration_threshold() -> u64 {
    100
}

pub fn load(path: &Path) -> Result<Submission, CliError> {
    let text = fs::read_to_string(path)?;
    let file: SubmissionFile = serde_json::from_str(&text)?;
    Ok(into_submission(file))
}

fn into_submission(file: SubmissionFile) -> Submission {
    let mut submission = Submission::new(
        file.test_name,
        file.pending_order_threshold,
        file.pending_duration_threshold,
    );

    submission.incoming_orders = build_table(TableRole::IncomingOrders, &file.incoming_orders);
    submission.preprocessor_bids = build_table(TableRole::PreprocessorBids, &file.preprocessor_bids);
    submission.preprocessor_asks = build_table(TableRole::PreprocessorAsks, &file.preprocessor_asks);
    submission.orderbook_bids = build_table(TableRole::OrderbookBids, &file.orderbook_bids);
    submission.orderbook_asks = build_table(TableRole::OrderbookAsks, &file.orderbook_asks);
    submission.trades = build_table(TableRole::Trades, &file.trades);

    submission
}

fn build_table(role: TableRole, records: &[Record]) -> Table {
    let mut table = Table::empty(role);
    for record in records {
        table.push_record(record.iter().map(|(key, value)| (key, cell_text(value))));
    }
    table
}

/// Textual representation of a cell of unknown origin type.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}
