use derive_more::{Constructor, Display, From};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter};

/// Value Object - upstream coin identifier (`bitcoin`, `ethereum`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Display, Serialize, Deserialize)]
pub struct CoinId(String);

impl CoinId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CoinId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - 24h percentage change
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Constructor, Serialize, Deserialize)]
pub struct PercentChange(f64);

impl PercentChange {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_gain(&self) -> bool {
        self.0 >= 0.0
    }
}

/// Fixed query sent on every poll tick
#[derive(Debug, Clone, PartialEq)]
pub struct MarketsQuery {
    pub vs_currency: String,
    pub order: String,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
}

impl Default for MarketsQuery {
    fn default() -> Self {
        Self {
            vs_currency: "usd".to_string(),
            order: "market_cap_desc".to_string(),
            per_page: 100,
            page: 1,
            sparkline: false,
        }
    }
}

impl MarketsQuery {
    /// Query parameters in the order the endpoint documents them.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.vs_currency.clone()),
            ("order", self.order.clone()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("sparkline", self.sparkline.to_string()),
        ]
    }
}

/// Table columns that can drive sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum SortKey {
    #[strum(serialize = "Rank")]
    Rank,
    #[strum(serialize = "Name")]
    Name,
    #[strum(serialize = "Price")]
    Price,
    #[strum(serialize = "24h Change")]
    Change24h,
    #[strum(serialize = "Market Cap")]
    MarketCap,
    #[strum(serialize = "Volume (24h)")]
    Volume,
}

impl SortKey {
    /// Numeric columns are right-aligned in the table.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, SortKey::Rank | SortKey::Name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header click: a new column starts ascending, the active one flips.
    pub fn toggle(current: Option<SortConfig>, key: SortKey) -> SortConfig {
        match current {
            Some(config) if config.key == key => SortConfig::new(key, config.direction.flipped()),
            _ => SortConfig::new(key, SortDirection::Asc),
        }
    }
}
