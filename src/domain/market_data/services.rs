use std::cmp::Ordering;

use crate::domain::market_data::{MarketRecord, SortConfig, SortDirection, SortKey};

/// Aggregate figures shown above the table
#[derive(Debug, Clone, PartialEq)]
pub struct MarketStats {
    pub total_market_cap: f64,
    pub total_volume: f64,
    pub top_gainer: MarketRecord,
}

impl MarketStats {
    /// `None` when there is nothing to aggregate.
    ///
    /// The top gainer is the first record holding the maximum 24h change.
    pub fn compute(markets: &[MarketRecord]) -> Option<Self> {
        let first = markets.first()?;

        let total_market_cap = markets.iter().map(|m| m.market_cap).sum();
        let total_volume = markets.iter().map(|m| m.total_volume).sum();
        let top_gainer = markets.iter().skip(1).fold(first, |best, current| {
            if current.change_24h() > best.change_24h() { current } else { best }
        });

        Some(Self { total_market_cap, total_volume, top_gainer: top_gainer.clone() })
    }
}

/// Search over the current list
pub struct MarketFilter;

impl MarketFilter {
    /// Case-insensitive substring match on name or symbol, order preserved.
    pub fn apply(markets: &[MarketRecord], term: &str) -> Vec<MarketRecord> {
        if term.is_empty() {
            return markets.to_vec();
        }
        let needle = term.to_lowercase();
        markets.iter().filter(|m| m.matches_lowercase(&needle)).cloned().collect()
    }
}

/// Column sorting for the table
pub struct MarketSorter;

impl MarketSorter {
    /// Stable sort; `None` keeps upstream order.
    pub fn sort(markets: &mut [MarketRecord], config: Option<SortConfig>) {
        let Some(config) = config else {
            return;
        };
        markets.sort_by(|a, b| Self::compare(a, b, config));
    }

    fn compare(a: &MarketRecord, b: &MarketRecord, config: SortConfig) -> Ordering {
        if config.key == SortKey::Rank {
            // unranked coins stay at the bottom in both directions
            return match (a.market_cap_rank, b.market_cap_rank) {
                (Some(x), Some(y)) => Self::directed(x.cmp(&y), config.direction),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
        }

        let ordering = match config.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.current_price.total_cmp(&b.current_price),
            SortKey::Change24h => a.change_24h().total_cmp(&b.change_24h()),
            SortKey::MarketCap => a.market_cap.total_cmp(&b.market_cap),
            SortKey::Volume => a.total_volume.total_cmp(&b.total_volume),
            SortKey::Rank => Ordering::Equal,
        };
        Self::directed(ordering, config.direction)
    }

    fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Filter then sort, the rows the table renders.
pub fn visible_markets(
    markets: &[MarketRecord],
    term: &str,
    sort: Option<SortConfig>,
) -> Vec<MarketRecord> {
    let mut rows = MarketFilter::apply(markets, term);
    MarketSorter::sort(&mut rows, sort);
    rows
}
