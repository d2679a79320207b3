// farm/utils/mod.rs

pub mod period_clock;
pub mod permit;
pub mod start_time;
pub mod token;

pub use period_clock::PeriodClock;
