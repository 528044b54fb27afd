use std::fmt::{Display, Formatter};

use crate::domain::table::is_placeholder;

/// Time-in-force / trigger policy of an incoming order.
///
/// Governs which lifetime fields are mandatory during normalization:
/// `GoodAfterTime` requires an explicit ActivateTime, `GoodTillCancel` and
/// `GoodForDay` require an explicit DeactivateTime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    AllOrNone,
    GoodTillCancel,
    GoodTillDate,
    GoodForDay,
    GoodAfterTime,
    MarketOnOpen,
    MarketOnClose,
    ImmediateOrCancel,
    FillOrKill,
    Market,
}

impl OrderType {
    pub const ALL: [Self; 10] = [
        Self::AllOrNone,
        Self::GoodTillCancel,
        Self::GoodTillDate,
        Self::GoodForDay,
        Self::GoodAfterTime,
        Self::MarketOnOpen,
        Self::MarketOnClose,
        Self::ImmediateOrCancel,
        Self::FillOrKill,
        Self::Market,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllOrNone => "AllOrNone",
            Self::GoodTillCancel => "GoodTillCancel",
            Self::GoodTillDate => "GoodTillDate",
            Self::GoodForDay => "GoodForDay",
            Self::GoodAfterTime => "GoodAfterTime",
            Self::MarketOnOpen => "MarketOnOpen",
            Self::MarketOnClose => "MarketOnClose",
            Self::ImmediateOrCancel => "ImmediateOrCancel",
            Self::FillOrKill => "FillOrKill",
            Self::Market => "Market",
        }
    }

    /// Interpret a cell value as an order type.
    ///
    /// Placeholder markers and unrecognized text both mean "unset": an order
    /// without a recognized type carries no mandatory lifetime fields.
    pub fn from_cell(value: &str) -> Option<Self> {
        if is_placeholder(value) {
            return None;
        }

        Self::ALL
            .into_iter()
            .find(|order_type| order_type.as_str() == value.trim())
    }
}

impl Display for OrderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
