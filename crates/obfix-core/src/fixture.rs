//! Submission pipeline and fixture document assembly.
//!
//! A [`Submission`] is everything one generation run needs: the six tables,
//! the two threshold scalars, and the test name the output file is derived
//! from. Validation either returns every issue found across all tables or a
//! [`Fixture`] whose `render()` is the exact text artifact the external test
//! runner consumes.

use time::PrimitiveDateTime;

use crate::domain::{timefmt, Table, TableRole};
use crate::error::ValidationIssue;
use crate::render::format_table;
use crate::validate::field::FieldRule;
use crate::validate::orders::validate_incoming_orders;
use crate::validate::table::validate_table;

const PREPROCESSOR_RULES: &[(&str, FieldRule)] = &[
    ("Symbol", FieldRule::Symbol),
    ("Price", FieldRule::PositiveInteger),
    ("Quantity", FieldRule::PositiveInteger),
    ("ParticipantID", FieldRule::ParticipantId),
];

const ORDERBOOK_RULES: &[(&str, FieldRule)] = &[
    ("Symbol", FieldRule::Symbol),
    ("Price", FieldRule::PositiveInteger),
    ("Quantity", FieldRule::PositiveInteger),
    ("OrderListSize", FieldRule::PositiveInteger),
];

const TRADE_RULES: &[(&str, FieldRule)] = &[
    ("Symbol", FieldRule::Symbol),
    ("SettlementPrice", FieldRule::PositiveInteger),
    ("Quantity", FieldRule::PositiveInteger),
    ("BuyerID", FieldRule::ParticipantId),
    ("SellerID", FieldRule::ParticipantId),
];

/// One fixture generation request.
#[derive(Debug, Clone)]
pub struct Submission {
    pub test_name: String,
    pub pending_order_threshold: u64,
    pub pending_duration_threshold: u64,
    pub incoming_orders: Table,
    pub preprocessor_bids: Table,
    pub preprocessor_asks: Table,
    pub orderbook_bids: Table,
    pub orderbook_asks: Table,
    pub trades: Table,
}

impl Submission {
    /// A submission with the given name and thresholds and all tables empty.
    pub fn new(
        test_name: impl Into<String>,
        pending_order_threshold: u64,
        pending_duration_threshold: u64,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            pending_order_threshold,
            pending_duration_threshold,
            incoming_orders: Table::empty(TableRole::IncomingOrders),
            preprocessor_bids: Table::empty(TableRole::PreprocessorBids),
            preprocessor_asks: Table::empty(TableRole::PreprocessorAsks),
            orderbook_bids: Table::empty(TableRole::OrderbookBids),
            orderbook_asks: Table::empty(TableRole::OrderbookAsks),
            trades: Table::empty(TableRole::Trades),
        }
    }

    /// Validate and normalize the whole submission at the current instant.
    pub fn validate(&self) -> Result<Fixture, Vec<ValidationIssue>> {
        self.validate_at(timefmt::now())
    }

    /// Validate and normalize with an explicit "now" for the ActivateTime
    /// default. Issues from every table accumulate; nothing short-circuits.
    pub fn validate_at(&self, now: PrimitiveDateTime) -> Result<Fixture, Vec<ValidationIssue>> {
        let normalized = validate_incoming_orders(&self.incoming_orders, now);

        let mut issues = normalized.issues;
        issues.extend(validate_table(&self.preprocessor_bids, PREPROCESSOR_RULES));
        issues.extend(validate_table(&self.preprocessor_asks, PREPROCESSOR_RULES));
        issues.extend(validate_table(&self.orderbook_bids, ORDERBOOK_RULES));
        issues.extend(validate_table(&self.orderbook_asks, ORDERBOOK_RULES));
        issues.extend(validate_table(&self.trades, TRADE_RULES));

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(Fixture {
            test_name: self.test_name.trim().to_owned(),
            pending_order_threshold: self.pending_order_threshold,
            pending_duration_threshold: self.pending_duration_threshold,
            incoming_orders: normalized.table,
            preprocessor_bids: self.preprocessor_bids.clone(),
            preprocessor_asks: self.preprocessor_asks.clone(),
            orderbook_bids: self.orderbook_bids.clone(),
            orderbook_asks: self.orderbook_asks.clone(),
            trades: self.trades.clone(),
        })
    }
}

/// A validated submission, ready to serialize.
#[derive(Debug, Clone)]
pub struct Fixture {
    test_name: String,
    pending_order_threshold: u64,
    pending_duration_threshold: u64,
    incoming_orders: Table,
    preprocessor_bids: Table,
    preprocessor_asks: Table,
    orderbook_bids: Table,
    orderbook_asks: Table,
    trades: Table,
}

impl Fixture {
    /// Output file name derived from the trimmed test name.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.test_name)
    }

    /// The incoming-orders table with time defaults applied.
    pub fn incoming_orders(&self) -> &Table {
        &self.incoming_orders
    }

    /// Serialize the fixture document.
    ///
    /// Section delimiters are literal; a table's block is skipped entirely
    /// when it has no rows (the `<empty>` marker belongs to the formatter,
    /// not the assembler).
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("---------------------ARGUMENTS---------------------\n");
        out.push_str(&format!(
            "PendingOrderThreshold: {}\n",
            self.pending_order_threshold
        ));
        out.push_str(&format!(
            "PendingDurationThreshold: {}\n",
            self.pending_duration_threshold
        ));

        out.push_str("---------------------INCOMING ORDERS---------------\n");
        push_block(&mut out, &self.incoming_orders);

        out.push_str("---------------------EXPECTED RESULT---------------\n");

        out.push_str("---------------------PREPROCESSOR------------------\n");
        push_block(&mut out, &self.preprocessor_bids);
        push_block(&mut out, &self.preprocessor_asks);
        out.push_str("---------------------PREPROCESSOR END--------------\n");

        out.push_str("---------------------ORDERBOOK---------------------\n");
        push_block(&mut out, &self.orderbook_bids);
        push_block(&mut out, &self.orderbook_asks);
        out.push_str("---------------------ORDERBOOK END-----------------\n");

        out.push_str("---------------------TRADES------------------------\n");
        push_block(&mut out, &self.trades);
        out.push_str("---------------------TRADES END--------------------\n");

        out
    }
}

fn push_block(out: &mut String, table: &Table) {
    if !table.is_empty() {
        out.push_str(&format_table(table));
    }
}
