use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{DashboardConfig, Poller, RefreshMarketsUseCase},
    domain::{
        logging::{LogComponent, get_logger},
        market_data::{MarketStats, SortConfig, SortKey, visible_markets},
        state::ViewPhase,
        theme::ThemeStore,
    },
    global_state::{dark_mode, dashboard_state, search_term, sort_config},
    infrastructure::{
        http::CoinGeckoRestClient, services::BrowserEnvironment, storage::LocalStoragePreferences,
    },
    log_debug, log_warn,
    presentation::{MarketRowView, StatsView},
};

const STYLES: &str = r#"
.dashboard {
    --bg: #f5f5f5;
    --paper: #ffffff;
    --head: #f5f5f5;
    --text: #1a1a1a;
    --muted: #6b6b6b;
    --border: #e0e0e0;
    --gain: #2e7d32;
    --loss: #d32f2f;
    font-family: Inter, system-ui, sans-serif;
    background: var(--bg);
    color: var(--text);
    min-height: 100vh;
    padding: 24px;
    box-sizing: border-box;
}

.dashboard.dark {
    --bg: #121212;
    --paper: #1e1e1e;
    --head: #1e1e1e;
    --text: #f0f0f0;
    --muted: #a0a0a0;
    --border: #333333;
    --gain: #66bb6a;
    --loss: #f44336;
}

.header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 32px;
}

.header h1 {
    font-size: 24px;
    font-weight: 500;
    margin: 0;
}

.icon-btn {
    background: none;
    border: none;
    color: inherit;
    font-size: 20px;
    cursor: pointer;
    padding: 6px 10px;
    border-radius: 50%;
}

.stats {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 24px;
    margin-bottom: 32px;
}

.card {
    background: var(--paper);
    border-radius: 6px;
    padding: 16px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
}

.card-label {
    color: var(--muted);
}

.card-value {
    font-size: 32px;
    margin-top: 4px;
}

.search {
    width: 100%;
    box-sizing: border-box;
    padding: 14px 16px;
    margin-bottom: 24px;
    font-size: 16px;
    background: var(--paper);
    color: var(--text);
    border: 1px solid var(--border);
    border-radius: 4px;
}

.table-wrap {
    background: var(--paper);
    border-radius: 8px;
    overflow: hidden;
}

table {
    width: 100%;
    border-collapse: collapse;
}

th {
    background: var(--head);
    font-weight: 600;
    cursor: pointer;
    user-select: none;
    position: sticky;
    top: 0;
}

th, td {
    padding: 12px 16px;
    border-bottom: 1px solid var(--border);
    text-align: left;
}

th.num, td.num {
    text-align: right;
}

tr:last-child td {
    border-bottom: none;
}

tbody tr:hover {
    background: rgba(127, 127, 127, 0.08);
}

.coin {
    display: flex;
    align-items: center;
    gap: 8px;
}

.avatar {
    width: 24px;
    height: 24px;
    border-radius: 50%;
}

.muted {
    color: var(--muted);
}

.gain {
    color: var(--gain);
}

.loss {
    color: var(--loss);
}

.overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    color: white;
    z-index: 1300;
}

.spinner {
    width: 48px;
    height: 48px;
    border: 4px solid rgba(255, 255, 255, 0.3);
    border-top-color: #1976d2;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

.spinner.small {
    width: 16px;
    height: 16px;
    border-width: 3px;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.alert {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 12px 16px;
    border-radius: 4px;
    background: #fdeded;
    color: #5f2120;
}

.alert button {
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
    font-weight: 600;
}

.refreshing {
    position: fixed;
    bottom: 16px;
    right: 16px;
    z-index: 2000;
    display: flex;
    align-items: center;
    gap: 8px;
    background: var(--paper);
    padding: 8px;
    border-radius: 4px;
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.2);
    font-size: 12px;
}
"#;

fn markets_use_case() -> RefreshMarketsUseCase<CoinGeckoRestClient> {
    let config = DashboardConfig::default();
    RefreshMarketsUseCase::new(CoinGeckoRestClient::new(config.api_base_url, config.query))
}

/// Start one fetch without waiting for it; the later response wins.
pub fn request_refresh() {
    let state = dashboard_state();
    spawn_local(async move {
        state.update(|s| s.begin_refresh());
        let result = markets_use_case().execute().await;
        state.update(|s| s.apply_result(result));
    });
}

/// Load the saved theme once and keep storage plus `<html>` in sync.
fn init_theme(config: &DashboardConfig) {
    let store =
        ThemeStore::with_key(LocalStoragePreferences::new(), config.theme_storage_key.clone());
    dark_mode().set(store.load(BrowserEnvironment::prefers_dark_scheme()));

    create_effect(move |_| {
        let dark = dark_mode().get();
        if let Err(e) = store.save(dark) {
            log_warn!(LogComponent::Presentation("Theme"), "{}", e);
        }
        BrowserEnvironment::apply_theme_class(dark);
    });
}

/// 🦀 Root dashboard component
#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::default();
    init_theme(&config);

    let poller = Poller::start(config.refresh_interval, request_refresh);
    on_cleanup(move || poller.cancel());

    // body is rebuilt only on phase transitions
    let phase = create_memo(move |_| dashboard_state().with(|s| s.phase()));

    get_logger().info(LogComponent::Presentation("App"), "🚀 Dashboard mounted");

    view! {
        <style>{STYLES}</style>
        <div class="dashboard" class:dark=move || dark_mode().get()>
            {move || match phase.get() {
                ViewPhase::InitialLoading => {
                    view! { <LoadingOverlay text="Loading cryptocurrency data..."/> }.into_view()
                }
                ViewPhase::Failed(message) => view! { <ErrorAlert message=message/> }.into_view(),
                ViewPhase::Ready => view! { <DashboardBody/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn DashboardBody() -> impl IntoView {
    let refreshing = move || dashboard_state().with(|s| s.refreshing);

    view! {
        <Header/>
        <StatsCards/>
        <SearchBar/>
        <MarketTable/>
        <Show when=refreshing>
            <RefreshingIndicator/>
        </Show>
    }
}

#[component]
fn Header() -> impl IntoView {
    let toggle = move |_| {
        dark_mode().update(|dark| *dark = !*dark);
        log_debug!(
            LogComponent::Presentation("Header"),
            "Theme toggled (dark: {})",
            dark_mode().get_untracked()
        );
    };

    view! {
        <div class="header">
            <h1>"📈 Crypto Dashboard"</h1>
            <button class="icon-btn" title="Toggle theme" on:click=toggle>
                {move || if dark_mode().get() { "☀️" } else { "🌙" }}
            </button>
        </div>
    }
}

#[component]
fn StatsCards() -> impl IntoView {
    let stats = create_memo(move |_| {
        dashboard_state().with(|s| MarketStats::compute(&s.markets).as_ref().map(StatsView::from))
    });

    move || {
        stats.get().map(|stats| {
            view! {
                <div class="stats">
                    <div class="card">
                        <div class="card-label">"Total Market Cap"</div>
                        <div class="card-value">{stats.total_market_cap}</div>
                    </div>
                    <div class="card">
                        <div class="card-label">"24h Volume"</div>
                        <div class="card-value">{stats.total_volume}</div>
                    </div>
                    <div class="card">
                        <div class="card-label">"Top Gainer (24h)"</div>
                        <div class="coin">
                            <img class="avatar" src=stats.top_gainer_image alt=""/>
                            <h3>{stats.top_gainer_symbol}</h3>
                        </div>
                        <div class="gain">{stats.top_gainer_change}</div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn SearchBar() -> impl IntoView {
    view! {
        <input
            class="search"
            type="search"
            placeholder="🔍 Search cryptocurrencies..."
            prop:value=move || search_term().get()
            on:input=move |ev| search_term().set(event_target_value(&ev))
        />
    }
}

#[component]
fn MarketTable() -> impl IntoView {
    let rows = create_memo(move |_| {
        let term = search_term().get();
        let sort = sort_config().get();
        dashboard_state().with(|s| {
            visible_markets(&s.markets, &term, sort).iter().map(MarketRowView::from).collect::<Vec<_>>()
        })
    });

    view! {
        <div class="table-wrap">
            <table>
                <thead>
                    <tr>
                        {SortKey::iter().map(|key| view! { <SortHeader column=key/> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.id.clone()
                        children=move |initial: MarketRowView| {
                            // keyed by coin; cells follow the latest row with that id
                            let id = initial.id.clone();
                            let image = initial.image.clone();
                            let name = initial.name.clone();
                            let symbol = initial.symbol.clone();
                            let row = create_memo(move |_| {
                                rows.with(|rows| MarketRowView::find(rows, &id).cloned())
                                    .unwrap_or_else(|| initial.clone())
                            });
                            view! {
                                <tr>
                                    <td>{move || row.with(|r| r.rank.clone())}</td>
                                    <td>
                                        <div class="coin">
                                            <img class="avatar" src=image alt=""/>
                                            <span>{name}</span>
                                            <span class="muted">"(" {symbol} ")"</span>
                                        </div>
                                    </td>
                                    <td class="num">{move || row.with(|r| r.price.clone())}</td>
                                    <td class=move || row.with(|r| format!("num {}", r.change_class()))>
                                        {move || row.with(|r| format!("{} {}", r.trend_icon(), r.change))}
                                    </td>
                                    <td class="num">{move || row.with(|r| r.market_cap.clone())}</td>
                                    <td class="num">{move || row.with(|r| r.volume.clone())}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn SortHeader(column: SortKey) -> impl IntoView {
    let class = if column.is_numeric() { "num" } else { "" };
    let on_click = move |_| {
        sort_config().update(|config| *config = Some(SortConfig::toggle(*config, column)));
    };
    let arrow = move || {
        sort_config()
            .get()
            .filter(|config| config.key == column)
            .map(|config| format!(" {}", config.direction.arrow()))
            .unwrap_or_default()
    };

    view! {
        <th class=class on:click=on_click>
            {column.to_string()}
            {arrow}
        </th>
    }
}

#[component]
fn LoadingOverlay(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="overlay">
            <div class="spinner"></div>
            <p>{text}</p>
        </div>
    }
}

#[component]
fn ErrorAlert(message: String) -> impl IntoView {
    view! {
        <div class="alert" role="alert">
            <span>{message}</span>
            <button on:click=move |_| request_refresh()>"Refresh"</button>
        </div>
    }
}

#[component]
fn RefreshingIndicator() -> impl IntoView {
    view! {
        <div class="refreshing">
            <div class="spinner small"></div>
            <span>"Refreshing data..."</span>
        </div>
    }
}
