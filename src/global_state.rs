use crate::domain::market_data::SortConfig;
use crate::domain::state::DashboardState;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub dashboard: RwSignal<DashboardState>,
    pub search_term: RwSignal<String>,
    pub sort_config: RwSignal<Option<SortConfig>>,
    pub dark_mode: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        dashboard: create_rw_signal(DashboardState::new()),
        search_term: create_rw_signal(String::new()),
        sort_config: create_rw_signal(None),
        dark_mode: create_rw_signal(false),
    })
}

crate::global_signals! {
    pub dashboard_state => dashboard: DashboardState,
    pub search_term => search_term: String,
    pub sort_config => sort_config: Option<SortConfig>,
    pub dark_mode => dark_mode: bool,
}
