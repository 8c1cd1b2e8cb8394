use crypto_guardian_wasm::app::SignalLogger;
use crypto_guardian_wasm::global_state::{global_logs, logs_paused};
use leptos::*;

#[test]
fn repeated_messages_keep_distinct_row_ids() {
    let logger = SignalLogger::new();
    logger.record("tick".to_string());
    logger.record("tick".to_string());

    global_logs().with_untracked(|lines| {
        assert_eq!(lines.len(), 2);
        assert_ne!(lines[0].0, lines[1].0, "equal text must not collapse into one row");
        assert_eq!(lines[0].1, "tick");
        assert_eq!(lines[1].1, "tick");
    });
}

#[test]
fn buffer_is_capped_at_one_hundred_lines() {
    let logger = SignalLogger::new();
    for i in 0..120 {
        logger.record(format!("line {i}"));
    }

    global_logs().with_untracked(|lines| {
        assert_eq!(lines.len(), 100);
        assert_eq!(lines.first().unwrap().1, "line 20");
        assert_eq!(lines.last().unwrap().1, "line 119");
    });
}

#[test]
fn paused_console_drops_new_lines() {
    let logger = SignalLogger::new();
    logger.record("before".to_string());
    logs_paused().set(true);
    logger.record("during".to_string());
    logs_paused().set(false);
    logger.record("after".to_string());

    global_logs().with_untracked(|lines| {
        let texts: Vec<&str> = lines.iter().map(|(_, text)| text.as_str()).collect();
        assert_eq!(texts, ["before", "after"]);
    });
}
