use leptos::*;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use strum::IntoEnumIterator;

use crate::domain::chat::{ChatMessage, Conversation, Sender};
use crate::domain::forecast::{Forecast, ForecastMetrics, ForecastOverlay, build_overlay};
use crate::domain::logging::{LogComponent, LogEntry, Logger, get_logger, get_time_provider};
use crate::domain::market_data::{Symbol, TimeInterval, TokenCategory, listed_tokens};
use crate::domain::narration::Narrator;
use crate::domain::news::{NewsItem, process_feed};
use crate::domain::polling::{PollState, RetryPolicy, RollingPoller};
use crate::global_state::{
    MAX_TRACKER_POINTS, current_section, current_symbol, global_logs, logs_paused,
    stream_abort_handles, ticker_stats, tracker_state,
};
use crate::infrastructure::http::{BinanceRestClient, ChatClient, ForecastClient, NewsClient};
use crate::infrastructure::services::ConsoleLogger;
use crate::infrastructure::speech::WebSpeechNarrator;
use crate::time_utils::future_weekday_labels;
use crate::view_state::{DashboardSection, format_change, format_usd, polyline_points};

/// Bridge logger: every entry goes to the browser console and, unless the
/// debug console is paused, into the on-page log signal.
pub struct SignalLogger {
    console: ConsoleLogger,
    next_line_id: AtomicU64,
}

impl SignalLogger {
    pub fn new() -> Self {
        Self { console: ConsoleLogger::new_development(), next_line_id: AtomicU64::new(0) }
    }

    /// Append one formatted line to the on-page console buffer. Lines
    /// carry a monotonic id so repeated messages stay distinct rows.
    pub fn record(&self, formatted: String) {
        if logs_paused().get_untracked() {
            return;
        }
        let id = self.next_line_id.fetch_add(1, Ordering::Relaxed);
        global_logs().update(|lines| {
            lines.push((id, formatted));
            while lines.len() > 100 {
                lines.remove(0);
            }
        });
    }
}

impl Default for SignalLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for SignalLogger {
    fn log(&self, entry: LogEntry) {
        let formatted = format!(
            "[{}] {} {}: {}",
            get_time_provider().format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        );
        self.record(formatted);
        self.console.log(entry);
    }
}

/// Abort and forget every price stream except the one for `keep`.
pub fn abort_other_streams(keep: &Symbol) {
    stream_abort_handles().update(|handles| {
        handles.retain(|symbol, handle| {
            let keep_it = symbol == keep;
            if !keep_it {
                handle.abort();
            }
            keep_it
        });
    });
}

/// (Re)start the rolling price stream for the currently selected token.
/// Any stream still registered for another token is aborted first.
pub fn start_price_stream(set_status: WriteSignal<String>) {
    let symbol = current_symbol().get_untracked();
    abort_other_streams(&symbol);
    if let Some(stale) = stream_abort_handles().with_untracked(|handles| handles.get(&symbol).cloned())
    {
        stale.abort();
    }

    get_logger().info(
        LogComponent::Application("PriceStream"),
        &format!("Starting price stream for {}", symbol.value()),
    );
    set_status.set(format!("Loading {} price data...", symbol.value()));

    let client = BinanceRestClient::new(TimeInterval::OneMinute);
    let poller =
        RollingPoller::new(symbol.clone(), MAX_TRACKER_POINTS, client, RetryPolicy::default())
            .with_on_change(move |state| {
                tracker_state().set(state.clone());
                match (&state.last_error, state.window.latest()) {
                    (Some(error), _) => set_status.set(error.to_string()),
                    (None, Some(point)) => {
                        set_status.set(format!("Live {}", format_usd(point.price.value())));
                    }
                    (None, None) => set_status.set("Waiting for data...".to_string()),
                }
            });

    let handle = poller.spawn();
    stream_abort_handles().update(|handles| {
        handles.insert(symbol, handle);
    });

    refresh_ticker_stats();
}

/// Select a new token: the old stream is superseded, the tracker resets to
/// its loading state and a fresh stream starts from an empty window.
pub fn switch_token(symbol: Symbol, set_status: WriteSignal<String>) {
    crate::log_info!(
        LogComponent::Application("PriceStream"),
        "Switching tracker to {}",
        symbol.value()
    );
    current_symbol().set(symbol);
    tracker_state().set(PollState::new(MAX_TRACKER_POINTS));
    ticker_stats().set(None);
    start_price_stream(set_status);
}

fn refresh_ticker_stats() {
    let symbol = current_symbol().get_untracked();
    spawn_local(async move {
        let client = BinanceRestClient::new(TimeInterval::OneMinute);
        match client.fetch_24hr_stats(&symbol).await {
            Ok(stats) => ticker_stats().set(Some(stats)),
            Err(e) => {
                crate::log_warn!(
                    LogComponent::Application("PriceStream"),
                    "24h stats fetch for {} failed: {}",
                    symbol.value(),
                    e
                );
            }
        }
    });
}

/// Root component of the dashboard.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .crypto-guardian-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
            }

            .header h1 {
                margin: 0 0 5px 0;
                font-size: 2em;
            }

            .header p {
                margin: 0;
                opacity: 0.8;
            }

            .nav {
                margin-top: 15px;
            }

            .nav-btn {
                background: rgba(255, 255, 255, 0.1);
                border: 1px solid rgba(255, 255, 255, 0.3);
                color: white;
                padding: 8px 18px;
                margin: 0 5px;
                border-radius: 8px;
                cursor: pointer;
            }

            .nav-btn.active {
                background: rgba(255, 255, 255, 0.3);
            }

            .card {
                background: rgba(0, 0, 0, 0.25);
                border-radius: 12px;
                padding: 20px;
                margin: 0 auto 20px auto;
                max-width: 820px;
            }

            .card h2 {
                margin-top: 0;
            }

            .tracker-toolbar {
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 10px;
                flex-wrap: wrap;
            }

            .token-select {
                background: #2c3e50;
                color: white;
                border: 1px solid #4a5d73;
                border-radius: 6px;
                padding: 6px 10px;
            }

            .ticker-stats {
                margin: 10px 0;
                font-size: 1.2em;
            }

            .change-up { color: #4ade80; }
            .change-down { color: #f87171; }

            .chart-status {
                opacity: 0.8;
                font-size: 0.9em;
                margin-top: 8px;
            }

            .tracker-error {
                background: rgba(248, 113, 113, 0.15);
                border: 1px solid #f87171;
                border-radius: 8px;
                padding: 15px;
                margin-top: 10px;
            }

            .tracker-error button {
                margin-top: 10px;
                background: #f87171;
                border: none;
                color: white;
                padding: 6px 14px;
                border-radius: 6px;
                cursor: pointer;
            }

            .stale-badge {
                display: inline-block;
                background: rgba(251, 191, 36, 0.2);
                border: 1px solid #fbbf24;
                border-radius: 6px;
                padding: 2px 8px;
                font-size: 0.8em;
                margin-left: 8px;
            }

            .chart-svg {
                width: 100%;
                background: #2c3e50;
                border: 2px solid #4a5d73;
                border-radius: 10px;
            }

            .axis-labels {
                display: flex;
                justify-content: space-between;
                font-size: 0.75em;
                opacity: 0.7;
                margin-top: 4px;
            }

            .forecast-metrics {
                font-size: 0.85em;
                opacity: 0.8;
                margin-top: 8px;
            }

            .news-card {
                background: rgba(255, 255, 255, 0.07);
                border-radius: 8px;
                padding: 12px 15px;
                margin-bottom: 10px;
                cursor: pointer;
            }

            .news-card:hover {
                background: rgba(255, 255, 255, 0.12);
            }

            .news-title {
                font-weight: 600;
            }

            .news-tag {
                display: inline-block;
                background: rgba(74, 222, 128, 0.2);
                border: 1px solid #4ade80;
                border-radius: 10px;
                padding: 1px 8px;
                font-size: 0.75em;
                margin: 4px 4px 0 0;
            }

            .news-body {
                margin-top: 8px;
                font-size: 0.9em;
                opacity: 0.9;
                white-space: pre-line;
            }

            .chatbot {
                position: fixed;
                bottom: 20px;
                right: 20px;
                width: 320px;
                z-index: 10;
            }

            .chat-toggle {
                float: right;
                background: #4ade80;
                border: none;
                border-radius: 50%;
                width: 48px;
                height: 48px;
                font-size: 1.3em;
                cursor: pointer;
            }

            .chat-window {
                background: #2c3e50;
                border: 1px solid #4a5d73;
                border-radius: 10px;
                padding: 10px;
                margin-bottom: 10px;
                max-height: 400px;
                display: flex;
                flex-direction: column;
            }

            .chat-log {
                overflow-y: auto;
                max-height: 300px;
                margin-bottom: 8px;
            }

            .chat-message {
                border-radius: 8px;
                padding: 6px 10px;
                margin: 4px 0;
                font-size: 0.9em;
            }

            .chat-message.user {
                background: rgba(74, 222, 128, 0.2);
                text-align: right;
            }

            .chat-message.bot {
                background: rgba(255, 255, 255, 0.1);
            }

            .chat-speak {
                background: none;
                border: none;
                cursor: pointer;
                margin-left: 6px;
            }

            .chat-input-row {
                display: flex;
                gap: 6px;
            }

            .chat-input-row input {
                flex: 1;
                background: #1e3c72;
                border: 1px solid #4a5d73;
                border-radius: 6px;
                color: white;
                padding: 6px 8px;
            }

            .chat-input-row button {
                background: #4ade80;
                border: none;
                border-radius: 6px;
                padding: 6px 10px;
                cursor: pointer;
            }

            .debug-console {
                background: rgba(0, 0, 0, 0.5);
                border-radius: 10px;
                padding: 10px;
                margin: 0 auto;
                max-width: 820px;
                font-family: 'Courier New', monospace;
                font-size: 0.75em;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 6px;
            }

            .debug-btn {
                background: rgba(255, 255, 255, 0.1);
                border: 1px solid rgba(255, 255, 255, 0.3);
                color: white;
                border-radius: 5px;
                padding: 2px 10px;
                cursor: pointer;
                margin-left: 5px;
            }

            .debug-log {
                max-height: 160px;
                overflow-y: auto;
            }

            .log-line {
                margin: 2px 0;
                padding: 1px 5px;
                border-radius: 3px;
            }

            .log-line:hover {
                background: rgba(255, 255, 255, 0.1);
            }
            "#}
        </style>
        <div class="crypto-guardian-app">
            <Header />
            <main>
                {move || match current_section().get() {
                    DashboardSection::Dashboard => view! {
                        <TokenPriceTracker />
                        <ForecastChart />
                    }
                    .into_view(),
                    DashboardSection::News => view! { <NewsPanel /> }.into_view(),
                }}
            </main>
            <ChatbotWidget />
            <DebugConsole />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1>"🛡️ Crypto Guardian"</h1>
            <p>"Live token tracking, price forecast and curated crypto news"</p>
            <div class="nav">
                {DashboardSection::iter()
                    .map(|section| {
                        view! {
                            <button
                                class=move || {
                                    if current_section().get() == section {
                                        "nav-btn active"
                                    } else {
                                        "nav-btn"
                                    }
                                }
                                on:click=move |_| current_section().set(section)
                            >
                                {section.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Rolling price tracker for the selected token: seed once, then one fresh
/// sample per poll cycle into a bounded window.
#[component]
fn TokenPriceTracker() -> impl IntoView {
    let (status, set_status) = create_signal("Connecting...".to_string());

    // Kick off the stream once on mount; nothing inside is tracked.
    create_effect(move |_| {
        start_price_stream(set_status);
    });

    let on_select = move |ev: web_sys::Event| {
        switch_token(Symbol::from(event_target_value(&ev).as_str()), set_status);
    };

    view! {
        <div class="card">
            <div class="tracker-toolbar">
                <h2>"Token Price Tracker"</h2>
                <select class="token-select" on:change=on_select>
                    {TokenCategory::iter()
                        .map(|category| {
                            let options = listed_tokens()
                                .into_iter()
                                .filter(|token| token.category == category)
                                .map(|token| {
                                    let value = token.symbol.value().to_string();
                                    let symbol = token.symbol.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || current_symbol().get() == symbol
                                        >
                                            {token.name}
                                        </option>
                                    }
                                })
                                .collect_view();
                            view! { <optgroup label=category.to_string()>{options}</optgroup> }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="ticker-stats">
                {move || {
                    ticker_stats()
                        .get()
                        .map(|stats| {
                            let change_class = if stats.change_percent >= 0.0 {
                                "change-up"
                            } else {
                                "change-down"
                            };
                            view! {
                                <span>{format_usd(stats.last_price.value())}</span>
                                " "
                                <span class=change_class>{format_change(stats.change_percent)}</span>
                            }
                        })
                }}
            </div>
            {move || {
                let state = tracker_state().get();
                match (state.is_seeded, &state.last_error) {
                    (false, None) => {
                        view! { <div class="chart-status">"Loading price data..."</div> }.into_view()
                    }
                    (false, Some(error)) => {
                        let terminal = error.is_terminal();
                        view! {
                            <div class="tracker-error">
                                <div>{error.to_string()}</div>
                                {terminal
                                    .then(|| {
                                        view! {
                                            <button on:click=move |_| start_price_stream(set_status)>
                                                "Retry"
                                            </button>
                                        }
                                    })}
                            </div>
                        }
                        .into_view()
                    }
                    (true, last_error) => {
                        let stale = last_error
                            .as_ref()
                            .map(|error| error.to_string());
                        view! {
                            {tracker_svg(&state)}
                            {stale
                                .map(|message| {
                                    view! {
                                        <span class="stale-badge">
                                            {format!("Showing last known data ({message})")}
                                        </span>
                                    }
                                })}
                        }
                        .into_view()
                    }
                }
            }}
            <div class="chart-status">{move || status.get()}</div>
        </div>
    }
}

/// Render the rolling window as a single SVG polyline with first/last axis
/// captions.
fn tracker_svg(state: &PollState) -> View {
    let series: Vec<Option<f64>> =
        state.window.iter().map(|point| Some(point.price.value())).collect();
    let (min, max) = match state.window.price_range() {
        Some((min, max)) => (min.value(), max.value()),
        None => (0.0, 1.0),
    };
    let points = polyline_points(&series, 780.0, 220.0, min, max);
    let first_label = state.window.oldest().map(|p| p.label.clone()).unwrap_or_default();
    let last_label = state.window.latest().map(|p| p.label.clone()).unwrap_or_default();

    view! {
        <svg class="chart-svg" viewBox="0 0 780 220" preserveAspectRatio="none">
            <polyline points=points fill="none" stroke="#4ade80" stroke-width="2" />
        </svg>
        <div class="axis-labels">
            <span>{first_label}</span>
            <span>{last_label}</span>
        </div>
    }
    .into_view()
}

/// Seven days of ETH closes with the model's predicted continuation drawn
/// as a dashed line on the same axis.
#[component]
fn ForecastChart() -> impl IntoView {
    let (overlay, set_overlay) = create_signal(ForecastOverlay::default());
    let (metrics, set_metrics) = create_signal::<Option<ForecastMetrics>>(None);
    let (status, set_status) = create_signal("Loading forecast...".to_string());

    create_effect(move |_| {
        spawn_local(async move {
            let client = BinanceRestClient::new(TimeInterval::OneDay);
            let history = match client.fetch_recent_closes(&Symbol::from("ETHUSDT"), 7).await {
                Ok(points) => points,
                Err(e) => {
                    set_status.set(format!("History fetch failed: {e}"));
                    return;
                }
            };

            // A missing forecast still leaves the historical line usable.
            let forecast = match ForecastClient::new().fetch_forecast().await {
                Ok(forecast) => forecast,
                Err(e) => {
                    get_logger().warn(
                        LogComponent::Application("Forecast"),
                        &format!("Forecast fetch failed: {}", e),
                    );
                    Forecast::default()
                }
            };

            let last_day =
                history.last().map(|point| point.captured_at.value()).unwrap_or_default();
            let labels = future_weekday_labels(last_day, forecast.predicted_closes.len());

            set_metrics.set(forecast.metrics);
            set_overlay.set(build_overlay(&history, &forecast, &labels));
            set_status.set(String::new());
        });
    });

    view! {
        <div class="card">
            <h2>"Ethereum 7-Day Forecast"</h2>
            {move || {
                let overlay = overlay.get();
                if overlay.is_empty() {
                    return view! { <div class="chart-status">{status.get()}</div> }.into_view();
                }
                let finite: Vec<f64> = overlay
                    .historical
                    .iter()
                    .chain(overlay.predicted.iter())
                    .filter_map(|value| *value)
                    .collect();
                let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
                let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let solid = polyline_points(&overlay.historical, 780.0, 240.0, min, max);
                let dashed = polyline_points(&overlay.predicted, 780.0, 240.0, min, max);
                view! {
                    <svg class="chart-svg" viewBox="0 0 780 240" preserveAspectRatio="none">
                        <polyline points=solid fill="none" stroke="#4ade80" stroke-width="2" />
                        <polyline
                            points=dashed
                            fill="none"
                            stroke="#fbbf24"
                            stroke-width="2"
                            stroke-dasharray="6 4"
                        />
                    </svg>
                    <div class="axis-labels">
                        {overlay
                            .labels
                            .iter()
                            .map(|label| view! { <span>{label.clone()}</span> })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
            {move || {
                metrics
                    .get()
                    .map(|m| {
                        view! {
                            <div class="forecast-metrics">
                                {format!("Model accuracy: {:.2} | Confidence: {:.2}", m.accuracy, m.confidence)}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Tagged news cards, newest first; a click expands the full text.
#[component]
fn NewsPanel() -> impl IntoView {
    let (items, set_items) = create_signal::<Vec<NewsItem>>(Vec::new());
    let (status, set_status) = create_signal("Loading news...".to_string());
    let (expanded, set_expanded) = create_signal::<Option<u64>>(None);

    create_effect(move |_| {
        spawn_local(async move {
            match NewsClient::new().fetch_feed().await {
                Ok(feed) => {
                    let processed = process_feed(feed);
                    set_status.set(if processed.is_empty() {
                        "No news available right now.".to_string()
                    } else {
                        String::new()
                    });
                    set_items.set(processed);
                }
                Err(e) => set_status.set(format!("News fetch failed: {e}")),
            }
        });
    });

    view! {
        <div class="card">
            <h2>"Crypto News"</h2>
            <div class="chart-status">{move || status.get()}</div>
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    let NewsItem { id, title, summary, content, tags, .. } = item;
                    let body = move || {
                        if expanded.get() == Some(id) { content.clone() } else { summary.clone() }
                    };
                    view! {
                        <div
                            class="news-card"
                            on:click=move |_| {
                                set_expanded
                                    .update(|open| {
                                        *open = if *open == Some(id) { None } else { Some(id) };
                                    })
                            }
                        >
                            <div class="news-title">{title}</div>
                            <div>
                                {tags
                                    .iter()
                                    .map(|tag| view! { <span class="news-tag">{tag.to_string()}</span> })
                                    .collect_view()}
                            </div>
                            <div class="news-body">{body}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Floating assistant widget. The conversation context returned by the
/// service is echoed back with every request; bot replies can be read
/// aloud and the mic button dictates into the input.
#[component]
fn ChatbotWidget() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (conversation, set_conversation) = create_signal(Conversation::new());
    let (draft, set_draft) = create_signal(String::new());
    let narrator: Rc<dyn Narrator> = Rc::new(WebSpeechNarrator::new());

    let send = move || {
        let question = draft.get_untracked();
        let mut accepted = false;
        set_conversation.update(|c| accepted = c.push_user(&question));
        if !accepted {
            return;
        }
        set_draft.set(String::new());

        let context = conversation.with_untracked(|c| c.context().to_string());
        spawn_local(async move {
            match ChatClient::new().send(question.trim(), &context).await {
                Ok(reply) => {
                    set_conversation.update(|c| c.apply_reply(reply.response, reply.context));
                }
                Err(e) => {
                    get_logger().error(
                        LogComponent::Presentation("Chatbot"),
                        &format!("Chat request failed: {}", e),
                    );
                    set_conversation.update(|c| c.apply_failure());
                }
            }
        });
    };

    let narrator_mic = Rc::clone(&narrator);
    let on_mic = move |_| {
        narrator_mic.listen(Box::new(move |transcript| set_draft.set(transcript)));
    };

    let narrator_speak = Rc::clone(&narrator);

    view! {
        <div class="chatbot">
            {move || {
                let narrator_speak = Rc::clone(&narrator_speak);
                let on_mic = on_mic.clone();
                open.get()
                    .then(move || {
                        view! {
                            <div class="chat-window">
                                <div class="chat-log">
                                    {move || {
                                        let narrator_speak = Rc::clone(&narrator_speak);
                                        conversation
                                            .get()
                                            .messages()
                                            .iter()
                                            .map(move |message| {
                                                chat_bubble(message, Rc::clone(&narrator_speak))
                                            })
                                            .collect_view()
                                    }}
                                    {move || {
                                        conversation
                                            .get()
                                            .is_pending()
                                            .then(|| {
                                                view! {
                                                    <div class="chat-message bot">"Thinking..."</div>
                                                }
                                            })
                                    }}
                                </div>
                                <div class="chat-input-row">
                                    <input
                                        type="text"
                                        placeholder="Ask about crypto..."
                                        prop:value=move || draft.get()
                                        prop:disabled=move || conversation.get().is_pending()
                                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                                            if ev.key() == "Enter" {
                                                send();
                                            }
                                        }
                                    />
                                    <button on:click=move |_| on_mic(())>"🎤"</button>
                                    <button on:click=move |_| send()>"Send"</button>
                                </div>
                            </div>
                        }
                    })
            }}
            <button class="chat-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || if open.get() { "✖" } else { "💬" }}
            </button>
        </div>
    }
}

fn chat_bubble(message: &ChatMessage, narrator: Rc<dyn Narrator>) -> View {
    let class = match message.sender {
        Sender::User => "chat-message user",
        Sender::Bot => "chat-message bot",
    };
    let text = message.text.clone();
    let speak_text = message.text.clone();
    let is_bot = matches!(message.sender, Sender::Bot);

    view! {
        <div class=class>
            <span>{text}</span>
            {is_bot
                .then(|| {
                    view! {
                        <button class="chat-speak" on:click=move |_| narrator.speak(&speak_text)>
                            "🔊"
                        </button>
                    }
                })}
        </div>
    }
    .into_view()
}

/// On-page log console wired to the global logger bridge.
#[component]
fn DebugConsole() -> impl IntoView {
    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Logger Console"</span>
                <span>
                    <button
                        class="debug-btn"
                        on:click=move |_| {
                            logs_paused().update(|paused| *paused = !*paused);
                            let message = if logs_paused().get_untracked() {
                                "Logging paused"
                            } else {
                                "Logging resumed"
                            };
                            get_logger().info(LogComponent::Presentation("DebugConsole"), message);
                        }
                    >
                        {move || if logs_paused().get() { "Resume" } else { "Pause" }}
                    </button>
                    <button
                        class="debug-btn"
                        on:click=move |_| {
                            global_logs().set(Vec::new());
                            get_logger().info(
                                LogComponent::Presentation("DebugConsole"),
                                "Log history cleared",
                            );
                        }
                    >
                        "Clear"
                    </button>
                </span>
            </div>
            <div class="debug-log">
                <For
                    each=move || global_logs().get()
                    key=|(id, _)| *id
                    children=move |(_, line)| view! { <div class="log-line">{line}</div> }
                />
            </div>
        </div>
    }
}
