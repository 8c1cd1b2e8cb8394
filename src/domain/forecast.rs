//! Forecast overlay: pairing a historical close series with a predicted
//! continuation so both render on one shared axis.

use crate::domain::market_data::PricePoint;

/// Model quality figures the forecast service may attach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastMetrics {
    pub accuracy: f64,
    pub confidence: f64,
}

/// Predicted closes for the days following the historical series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Forecast {
    pub predicted_closes: Vec<f64>,
    pub metrics: Option<ForecastMetrics>,
}

/// Two datasets aligned over one label axis. The historical dataset is
/// null-padded over the forecast positions and vice versa; the forecast
/// dataset repeats the last historical close so the dashed line visually
/// continues the solid one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastOverlay {
    pub labels: Vec<String>,
    pub historical: Vec<Option<f64>>,
    pub predicted: Vec<Option<f64>>,
}

impl ForecastOverlay {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the paired chart datasets.
///
/// `future_labels` must carry one label per predicted close; extra labels
/// are ignored and missing ones are filled with an empty string so the two
/// datasets always line up with the label axis.
pub fn build_overlay(
    historical: &[PricePoint],
    forecast: &Forecast,
    future_labels: &[String],
) -> ForecastOverlay {
    if historical.is_empty() {
        return ForecastOverlay::default();
    }

    let predicted = &forecast.predicted_closes;
    let mut labels: Vec<String> = historical.iter().map(|p| p.label.clone()).collect();
    for i in 0..predicted.len() {
        labels.push(future_labels.get(i).cloned().unwrap_or_default());
    }

    let mut historical_series: Vec<Option<f64>> =
        historical.iter().map(|p| Some(p.price.value())).collect();
    historical_series.extend(std::iter::repeat(None).take(predicted.len()));

    let mut predicted_series: Vec<Option<f64>> = Vec::with_capacity(labels.len());
    if predicted.is_empty() {
        predicted_series.resize(labels.len(), None);
    } else {
        // Bridge point: the dashed line starts where the solid line ends.
        predicted_series.resize(historical.len() - 1, None);
        predicted_series.push(Some(historical[historical.len() - 1].price.value()));
        predicted_series.extend(predicted.iter().map(|p| Some(*p)));
    }

    ForecastOverlay { labels, historical: historical_series, predicted: predicted_series }
}
