pub mod chat;
pub mod errors;
pub mod forecast;
pub mod logging;
pub mod market_data;
pub mod narration;
pub mod news;
pub mod polling;
