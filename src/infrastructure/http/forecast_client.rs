use crate::domain::errors::{DataError, NetworkResult};
use crate::domain::forecast::{Forecast, ForecastMetrics};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::ServiceEndpoints;
use gloo_net::http::Request;

#[derive(Debug, serde::Deserialize)]
struct ForecastMetricsDto {
    accuracy: f64,
    confidence: f64,
}

#[derive(Debug, serde::Deserialize)]
struct ForecastResponseDto {
    predicted_close_prices: Vec<f64>,
    #[serde(default)]
    metrics: Option<ForecastMetricsDto>,
}

impl From<ForecastResponseDto> for Forecast {
    fn from(dto: ForecastResponseDto) -> Self {
        Forecast {
            predicted_closes: dto.predicted_close_prices,
            metrics: dto
                .metrics
                .map(|m| ForecastMetrics { accuracy: m.accuracy, confidence: m.confidence }),
        }
    }
}

/// Client for the price-prediction microservice.
pub struct ForecastClient {
    base_url: String,
}

impl ForecastClient {
    pub fn new() -> Self {
        Self { base_url: ServiceEndpoints::default().forecast }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    pub async fn fetch_forecast(&self) -> NetworkResult<Forecast> {
        let url = self.predict_url();
        get_logger().info(
            LogComponent::Infrastructure("ForecastAPI"),
            &format!("Fetching forecast from: {}", url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DataError::NetworkError(format!("{e:?}")))?;

        if !response.ok() {
            return Err(DataError::HttpStatus(response.status()));
        }

        let dto: ForecastResponseDto =
            response.json().await.map_err(|e| DataError::ParseError(format!("{e:?}")))?;

        Ok(dto.into())
    }
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}
