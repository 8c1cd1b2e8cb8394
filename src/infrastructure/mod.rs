pub mod http;
pub mod services;
pub mod speech;
