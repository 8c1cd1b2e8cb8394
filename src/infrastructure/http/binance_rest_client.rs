use crate::domain::errors::{DataError, NetworkResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{
    Price, PricePoint, Symbol, TickerStats, TimeInterval, Timestamp,
};
use crate::domain::polling::SampleSource;
use crate::infrastructure::http::ServiceEndpoints;
use crate::time_utils::{clock_label, weekday_label};
use gloo_net::http::Request;

/// Positional kline row from the exchange klines endpoint.
#[derive(Debug, serde::Deserialize)]
struct BinanceKline(
    u64,                   // Open time
    String,                // Open
    String,                // High
    String,                // Low
    String,                // Close
    String,                // Volume
    serde::de::IgnoredAny, // Close time
    serde::de::IgnoredAny, // Quote asset volume
    serde::de::IgnoredAny, // Number of trades
    serde::de::IgnoredAny, // Taker buy base asset volume
    serde::de::IgnoredAny, // Taker buy quote asset volume
    serde::de::IgnoredAny, // Ignore
);

#[derive(Debug, serde::Deserialize)]
struct TickerPriceDto {
    #[allow(dead_code)]
    symbol: String,
    price: String,
}

#[derive(Debug, serde::Deserialize)]
struct Ticker24hrDto {
    #[serde(rename = "lastPrice")]
    last_price: String,
    #[serde(rename = "priceChangePercent")]
    price_change_percent: String,
}

/// REST client for the exchange API; serves both poller fetches (seed via
/// klines, update via the ticker price endpoint) plus the 24h header stats.
pub struct BinanceRestClient {
    base_url: String,
    interval: TimeInterval,
}

impl BinanceRestClient {
    pub fn new(interval: TimeInterval) -> Self {
        Self { base_url: ServiceEndpoints::default().exchange, interval }
    }

    pub fn with_base_url(base_url: impl Into<String>, interval: TimeInterval) -> Self {
        Self { base_url: base_url.into(), interval }
    }

    pub fn klines_url(&self, symbol: &Symbol, limit: usize) -> String {
        format!(
            "{}/klines?symbol={}&interval={}&limit={}",
            self.base_url,
            symbol.value(),
            self.interval.to_binance_str(),
            limit
        )
    }

    pub fn ticker_price_url(&self, symbol: &Symbol) -> String {
        format!("{}/ticker/price?symbol={}", self.base_url, symbol.value())
    }

    pub fn ticker_24hr_url(&self, symbol: &Symbol) -> String {
        format!("{}/ticker/24hr?symbol={}", self.base_url, symbol.value())
    }

    fn axis_label(&self, open_time: u64) -> String {
        match self.interval {
            TimeInterval::OneDay => weekday_label(open_time),
            _ => clock_label(open_time),
        }
    }

    /// Most recent `limit` closes, ascending by open time.
    pub async fn fetch_recent_closes(
        &self,
        symbol: &Symbol,
        limit: usize,
    ) -> NetworkResult<Vec<PricePoint>> {
        let url = self.klines_url(symbol, limit);
        get_logger().info(
            LogComponent::Infrastructure("BinanceAPI"),
            &format!("Fetching {} closes from: {}", limit, url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DataError::NetworkError(format!("{e:?}")))?;

        if !response.ok() {
            return Err(DataError::HttpStatus(response.status()));
        }

        let klines: Vec<BinanceKline> =
            response.json().await.map_err(|e| DataError::ParseError(format!("{e:?}")))?;

        let mut points = Vec::with_capacity(klines.len());
        for kline in klines {
            let close = kline
                .4
                .parse::<f64>()
                .map_err(|_| DataError::ParseError("Invalid close price".to_string()))?;
            points.push(PricePoint::new(
                self.axis_label(kline.0),
                Price::new(close),
                Timestamp::from_millis(kline.0),
            ));
        }

        get_logger().info(
            LogComponent::Infrastructure("BinanceAPI"),
            &format!("Loaded {} closes for {}", points.len(), symbol.value()),
        );

        Ok(points)
    }

    /// Single newest price from the ticker endpoint, stamped with the
    /// current wall clock.
    pub async fn fetch_latest(&self, symbol: &Symbol) -> NetworkResult<PricePoint> {
        let url = self.ticker_price_url(symbol);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DataError::NetworkError(format!("{e:?}")))?;

        if !response.ok() {
            return Err(DataError::HttpStatus(response.status()));
        }

        let ticker: TickerPriceDto =
            response.json().await.map_err(|e| DataError::ParseError(format!("{e:?}")))?;

        let price = ticker
            .price
            .parse::<f64>()
            .map_err(|_| DataError::ParseError("Invalid ticker price".to_string()))?;

        let now = js_sys::Date::now() as u64;
        Ok(PricePoint::new(clock_label(now), Price::new(price), Timestamp::from_millis(now)))
    }

    /// 24h statistics shown next to the tracker title.
    pub async fn fetch_24hr_stats(&self, symbol: &Symbol) -> NetworkResult<TickerStats> {
        let url = self.ticker_24hr_url(symbol);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DataError::NetworkError(format!("{e:?}")))?;

        if !response.ok() {
            return Err(DataError::HttpStatus(response.status()));
        }

        let stats: Ticker24hrDto =
            response.json().await.map_err(|e| DataError::ParseError(format!("{e:?}")))?;

        let last_price = stats
            .last_price
            .parse::<f64>()
            .map_err(|_| DataError::ParseError("Invalid last price".to_string()))?;
        let change_percent = stats
            .price_change_percent
            .parse::<f64>()
            .map_err(|_| DataError::ParseError("Invalid change percent".to_string()))?;

        Ok(TickerStats::new(Price::new(last_price), change_percent))
    }
}

impl SampleSource for BinanceRestClient {
    async fn seed(&self, subject: &Symbol, limit: usize) -> NetworkResult<Vec<PricePoint>> {
        self.fetch_recent_closes(subject, limit).await
    }

    async fn latest(&self, subject: &Symbol) -> NetworkResult<PricePoint> {
        self.fetch_latest(subject).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn klines_url_includes_interval_and_limit() {
        let client = BinanceRestClient::new(TimeInterval::OneMinute);
        assert_eq!(
            client.klines_url(&Symbol::from("SHIBUSDT"), 30),
            "https://api.binance.com/api/v3/klines?symbol=SHIBUSDT&interval=1m&limit=30"
        );
    }

    #[test]
    fn ticker_urls_target_the_symbol() {
        let client = BinanceRestClient::new(TimeInterval::OneMinute);
        let symbol = Symbol::from("dogeusdt");
        assert_eq!(
            client.ticker_price_url(&symbol),
            "https://api.binance.com/api/v3/ticker/price?symbol=DOGEUSDT"
        );
        assert_eq!(
            client.ticker_24hr_url(&symbol),
            "https://api.binance.com/api/v3/ticker/24hr?symbol=DOGEUSDT"
        );
    }

    #[test]
    fn kline_rows_parse_with_ignored_tail() {
        let raw = r#"[[1700000000000,"1.0","2.0","0.5","1.5","100.0",0,"0",0,"0","0","0"]]"#;
        let rows: Vec<BinanceKline> = serde_json::from_str(raw).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, 1700000000000);
        assert_eq!(rows[0].4, "1.5");
    }
}
