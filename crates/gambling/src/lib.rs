//! Gambling diary.
//!
//! Winnings are reported in full as income; losses are deductible only up to
//! the amount of winnings, so the two are always recorded separately. Each
//! entry captures what the IRS expects a diary to show: date and type of
//! wager, the establishment, and the amounts won and lost.

pub mod log;
pub mod summary;
pub mod wagering;

pub use log::{GamblingLog, GamblingLogInput, NewGamblingLog, parse_date, parse_time};
pub use summary::{GamblingSummary, Outcome};
pub use wagering::WageringType;
