pub use super::value_objects::{Price, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Domain entity - one timestamped price observation.
///
/// Immutable after creation; the label is the axis caption the chart shows
/// for this point (e.g. "14:02").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub label: String,
    pub price: Price,
    pub captured_at: Timestamp,
}

impl PricePoint {
    pub fn new(label: impl Into<String>, price: Price, captured_at: Timestamp) -> Self {
        Self { label: label.into(), price, captured_at }
    }
}

/// Domain entity - bounded rolling window of the most recent price points.
///
/// Ordered oldest-first; appending to a full window evicts the oldest point
/// so the length never exceeds the capacity. Duplicate timestamps are
/// allowed, the window keeps arrival order for them.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow {
    points: VecDeque<PricePoint>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        // A zero-capacity window is useless; clamp to "always replace".
        let capacity = capacity.max(1);
        Self { points: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append the newest point, evicting the oldest when full.
    pub fn push(&mut self, point: PricePoint) {
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Replace the whole window with a seed batch, oldest-first.
    ///
    /// Keeps only the most recent `capacity` points when the batch is
    /// larger than the window.
    pub fn reset_with(&mut self, batch: Vec<PricePoint>) {
        self.points.clear();
        let skip = batch.len().saturating_sub(self.capacity);
        self.points.extend(batch.into_iter().skip(skip));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.back()
    }

    pub fn oldest(&self) -> Option<&PricePoint> {
        self.points.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }

    /// Defensive copy for consumers; the window itself is only ever
    /// mutated by its owning poller.
    pub fn to_vec(&self) -> Vec<PricePoint> {
        self.points.iter().cloned().collect()
    }

    /// Price range over the current window, if non-empty.
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let first = self.points.front()?.price;
        let mut min = first;
        let mut max = first;
        for point in &self.points {
            if point.price.value() < min.value() {
                min = point.price;
            }
            if point.price.value() > max.value() {
                max = point.price;
            }
        }
        Some((min, max))
    }
}
