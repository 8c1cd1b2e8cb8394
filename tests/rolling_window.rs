use crypto_guardian_wasm::domain::market_data::{Price, PricePoint, RollingWindow, Timestamp};
use quickcheck_macros::quickcheck;

fn point(index: u64) -> PricePoint {
    PricePoint::new(
        format!("p{index}"),
        Price::new(index as f64),
        Timestamp::from_millis(index * 1000),
    )
}

#[quickcheck]
fn length_never_exceeds_capacity(values: Vec<u32>) -> bool {
    let mut window = RollingWindow::new(30);
    for v in &values {
        window.push(point(*v as u64));
    }
    window.len() == values.len().min(30)
}

#[quickcheck]
fn window_keeps_the_most_recent_points(values: Vec<u32>) -> bool {
    let mut window = RollingWindow::new(30);
    for v in &values {
        window.push(point(*v as u64));
    }
    let expected: Vec<u64> =
        values.iter().rev().take(30).rev().map(|v| *v as u64 * 1000).collect();
    let actual: Vec<u64> = window.iter().map(|p| p.captured_at.value()).collect();
    actual == expected
}

#[test]
fn full_window_evicts_oldest_first() {
    let mut window = RollingWindow::new(3);
    for i in 0..5 {
        window.push(point(i));
    }
    let labels: Vec<&str> = window.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["p2", "p3", "p4"]);
    assert_eq!(window.oldest().unwrap().label, "p2");
    assert_eq!(window.latest().unwrap().label, "p4");
}

#[test]
fn capacity_one_always_holds_the_newest() {
    let mut window = RollingWindow::new(1);
    window.push(point(1));
    window.push(point(2));
    assert_eq!(window.len(), 1);
    assert_eq!(window.latest().unwrap().label, "p2");
}

#[test]
fn zero_capacity_is_clamped() {
    let mut window = RollingWindow::new(0);
    window.push(point(7));
    assert_eq!(window.capacity(), 1);
    assert_eq!(window.len(), 1);
}

#[test]
fn reset_with_keeps_only_the_tail_of_an_oversized_batch() {
    let mut window = RollingWindow::new(3);
    window.reset_with((0..10).map(point).collect());
    let labels: Vec<&str> = window.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["p7", "p8", "p9"]);
}

#[test]
fn duplicate_timestamps_keep_arrival_order() {
    let mut window = RollingWindow::new(5);
    window.push(PricePoint::new("a", Price::new(1.0), Timestamp::from_millis(42)));
    window.push(PricePoint::new("b", Price::new(2.0), Timestamp::from_millis(42)));
    let labels: Vec<&str> = window.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b"]);
}

#[test]
fn price_range_spans_the_window() {
    let mut window = RollingWindow::new(10);
    for i in [5u64, 2, 9, 7] {
        window.push(point(i));
    }
    let (min, max) = window.price_range().unwrap();
    assert_eq!(min.value(), 2.0);
    assert_eq!(max.value(), 9.0);
    assert!(RollingWindow::new(3).price_range().is_none());
}
