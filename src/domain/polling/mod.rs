//! Rolling time-series polling engine: seed once, then keep a bounded
//! window fresh with single-sample updates on a two-level retry delay.

pub mod poller;

pub use poller::*;
