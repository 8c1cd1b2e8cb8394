use crypto_guardian_wasm::domain::forecast::{Forecast, build_overlay};
use crypto_guardian_wasm::domain::market_data::{Price, PricePoint, Timestamp};

fn history(closes: &[f64]) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            PricePoint::new(
                format!("d{i}"),
                Price::new(*close),
                Timestamp::from_millis(i as u64 * 86_400_000),
            )
        })
        .collect()
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn overlay_aligns_both_series_on_one_axis() {
    let historical = history(&[1.0, 2.0, 3.0]);
    let forecast = Forecast { predicted_closes: vec![4.0, 5.0], metrics: None };

    let overlay = build_overlay(&historical, &forecast, &labels(&["Mon", "Tue"]));

    assert_eq!(overlay.labels, vec!["d0", "d1", "d2", "Mon", "Tue"]);
    assert_eq!(overlay.historical, vec![Some(1.0), Some(2.0), Some(3.0), None, None]);
    // The dashed line starts on the last historical close.
    assert_eq!(overlay.predicted, vec![None, None, Some(3.0), Some(4.0), Some(5.0)]);
}

#[test]
fn empty_history_yields_an_empty_overlay() {
    let forecast = Forecast { predicted_closes: vec![1.0], metrics: None };
    let overlay = build_overlay(&[], &forecast, &labels(&["Mon"]));
    assert!(overlay.is_empty());
}

#[test]
fn no_predictions_leaves_the_predicted_series_blank() {
    let historical = history(&[1.0, 2.0]);
    let overlay = build_overlay(&historical, &Forecast::default(), &[]);

    assert_eq!(overlay.labels.len(), 2);
    assert_eq!(overlay.predicted, vec![None, None]);
    assert_eq!(overlay.historical, vec![Some(1.0), Some(2.0)]);
}

#[test]
fn missing_future_labels_are_padded() {
    let historical = history(&[1.0]);
    let forecast = Forecast { predicted_closes: vec![2.0, 3.0], metrics: None };

    let overlay = build_overlay(&historical, &forecast, &labels(&["Mon"]));

    assert_eq!(overlay.labels, vec!["d0", "Mon", ""]);
    assert_eq!(overlay.predicted, vec![Some(1.0), Some(2.0), Some(3.0)]);
}

#[test]
fn extra_future_labels_are_ignored() {
    let historical = history(&[1.0, 2.0]);
    let forecast = Forecast { predicted_closes: vec![3.0], metrics: None };

    let overlay = build_overlay(&historical, &forecast, &labels(&["Mon", "Tue", "Wed"]));
    assert_eq!(overlay.labels, vec!["d0", "d1", "Mon"]);
}
