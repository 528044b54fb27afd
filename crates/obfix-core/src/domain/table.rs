use std::fmt::{Display, Formatter};

/// Sentinel cell text meaning "not specified, defaults apply elsewhere".
pub const PLACEHOLDER: &str = "-";

/// Whether a cell value is the absence marker.
///
/// The grid collaborator seeds cells with `-`, leaves untouched cells blank,
/// and renders true-missing values as the textual null marker `nan`. All
/// three mean the same thing for every column, so the check lives in one
/// place.
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == PLACEHOLDER || trimmed == "nan"
}

/// The six table roles of a fixture submission, each with a fixed column
/// schema and a display label used to tag validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableRole {
    IncomingOrders,
    PreprocessorBids,
    PreprocessorAsks,
    OrderbookBids,
    OrderbookAsks,
    Trades,
}

impl TableRole {
    pub const ALL: [Self; 6] = [
        Self::IncomingOrders,
        Self::PreprocessorBids,
        Self::PreprocessorAsks,
        Self::OrderbookBids,
        Self::OrderbookAsks,
        Self::Trades,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::IncomingOrders => "Incoming Orders",
            Self::PreprocessorBids => "Preprocessor Bids",
            Self::PreprocessorAsks => "Preprocessor Asks",
            Self::OrderbookBids => "Orderbook Bids",
            Self::OrderbookAsks => "Orderbook Asks",
            Self::Trades => "Trades",
        }
    }

    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::IncomingOrders => &[
                "OrderCounter",
                "Action",
                "Symbol",
                "OrderType",
                "Side",
                "Price",
                "Quantity",
                "ActivateTime",
                "DeactivateTime",
                "ParticipantID",
            ],
            Self::PreprocessorBids | Self::PreprocessorAsks => &[
                "Symbol",
                "Side",
                "Action",
                "Price",
                "Quantity",
                "ParticipantID",
            ],
            Self::OrderbookBids | Self::OrderbookAsks => {
                &["Symbol", "Side", "Price", "Quantity", "OrderListSize"]
            }
            Self::Trades => &["Symbol", "SettlementPrice", "Quantity", "BuyerID", "SellerID"],
        }
    }

    pub fn column_index(self, name: &str) -> Option<usize> {
        self.columns().iter().position(|column| *column == name)
    }
}

impl Display for TableRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered sequence of rows sharing a fixed column schema.
///
/// Cells are stored as text in schema order; absent columns are filled with
/// the placeholder when a record is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    role: TableRole,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn empty(role: TableRole) -> Self {
        Self {
            role,
            rows: Vec::new(),
        }
    }

    pub const fn role(&self) -> TableRole {
        self.role
    }

    pub const fn label(&self) -> &'static str {
        self.role.label()
    }

    pub const fn columns(&self) -> &'static [&'static str] {
        self.role.columns()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Cell text at (row, column), by schema column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.role.column_index(column)?;
        self.rows.get(row).map(|cells| cells[index].as_str())
    }

    /// Append a row given as (column, value) pairs in any order.
    ///
    /// Columns outside the schema are ignored; schema columns not present in
    /// the record are filled with the placeholder.
    pub fn push_record<K, V>(&mut self, record: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let pairs: Vec<(K, String)> = record
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();

        let cells = self
            .columns()
            .iter()
            .map(|column| {
                pairs
                    .iter()
                    .find(|(key, _)| key.as_ref() == *column)
                    .map(|(_, value)| value.clone())
                    .unwrap_or_else(|| String::from(PLACEHOLDER))
            })
            .collect();

        self.rows.push(cells);
    }

    /// Append a row already in schema order. Rows shorter than the schema are
    /// padded with the placeholder; extra cells are dropped.
    pub fn push_cells(&mut self, mut cells: Vec<String>) {
        cells.resize(self.columns().len(), String::from(PLACEHOLDER));
        self.rows.push(cells);
    }
}
