pub mod binance_rest_client;
pub mod chat_client;
pub mod forecast_client;
pub mod news_client;

pub use binance_rest_client::BinanceRestClient;
pub use chat_client::ChatClient;
pub use forecast_client::ForecastClient;
pub use news_client::NewsClient;

/// Base URLs of every service the dashboard talks to. The defaults match
/// the deployed microservices; tests and alternate deployments override
/// individual bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub exchange: String,
    pub forecast: String,
    pub news: String,
    pub chat: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            exchange: "https://api.binance.com/api/v3".to_string(),
            forecast: "http://20.199.80.240:5020".to_string(),
            news: "http://20.199.80.240:5030".to_string(),
            chat: "http://20.199.80.240:5010".to_string(),
        }
    }
}
