use crate::domain::market_data::{Symbol, TickerStats};
use crate::domain::polling::PollState;
use crate::global_signals;
use crate::view_state::DashboardSection;
use futures::future::AbortHandle;
use leptos::{RwSignal, create_rw_signal};
use std::collections::HashMap;

/// Window size of the rolling tracker buffer.
pub const MAX_TRACKER_POINTS: usize = 30;

/// All reactive state shared across components.
#[derive(Clone, Copy)]
pub struct Globals {
    pub current_symbol: RwSignal<Symbol>,
    pub current_section: RwSignal<DashboardSection>,
    pub tracker_state: RwSignal<PollState>,
    pub ticker_stats: RwSignal<Option<TickerStats>>,
    pub stream_abort_handles: RwSignal<HashMap<Symbol, AbortHandle>>,
    /// Debug console rows as (monotonic id, formatted line).
    pub global_logs: RwSignal<Vec<(u64, String)>>,
    pub logs_paused: RwSignal<bool>,
}

thread_local! {
    static GLOBALS: Globals = Globals {
        current_symbol: create_rw_signal(Symbol::from("SHIBUSDT")),
        current_section: create_rw_signal(DashboardSection::Dashboard),
        tracker_state: create_rw_signal(PollState::new(MAX_TRACKER_POINTS)),
        ticker_stats: create_rw_signal(None),
        stream_abort_handles: create_rw_signal(HashMap::new()),
        global_logs: create_rw_signal(Vec::new()),
        logs_paused: create_rw_signal(false),
    };
}

pub fn globals() -> Globals {
    GLOBALS.with(|g| *g)
}

global_signals! {
    pub current_symbol => current_symbol: Symbol,
    pub current_section => current_section: DashboardSection,
    pub tracker_state => tracker_state: PollState,
    pub ticker_stats => ticker_stats: Option<TickerStats>,
    pub stream_abort_handles => stream_abort_handles: HashMap<Symbol, AbortHandle>,
    pub global_logs => global_logs: Vec<(u64, String)>,
    pub logs_paused => logs_paused: bool,
}
