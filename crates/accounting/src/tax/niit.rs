//! Net Investment Income Tax.

use core::ops::{Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::payroll::FilingStatus;

/// Floating-point types the NIIT formula can be evaluated in.
pub trait NiitAmount: Copy + PartialOrd + Sub<Output = Self> + Mul<Output = Self> {
    const ZERO: Self;
    const DEFAULT_THRESHOLD: Self;
    const DEFAULT_RATE: Self;
}

macro_rules! impl_niit_amount {
    ($($t:ty),*) => {$(
        impl NiitAmount for $t {
            const ZERO: Self = 0.0;
            const DEFAULT_THRESHOLD: Self = 200_000.0;
            const DEFAULT_RATE: Self = 0.038;
        }
    )*};
}

impl_niit_amount!(f32, f64);

/// `min(max(magi - threshold, 0), investment_income) * rate`.
pub fn calculate_niit<T: NiitAmount>(magi: T, investment_income: T, threshold: T, rate: T) -> T {
    let excess = if magi > threshold { magi - threshold } else { T::ZERO };
    let applicable = if excess < investment_income { excess } else { investment_income };
    applicable * rate
}

/// Threshold and rate for a NIIT computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NiitParams {
    pub threshold: f64,
    pub rate: f64,
}

impl Default for NiitParams {
    fn default() -> Self {
        Self {
            threshold: f64::DEFAULT_THRESHOLD,
            rate: f64::DEFAULT_RATE,
        }
    }
}

impl NiitParams {
    pub fn for_filing_status(status: FilingStatus) -> Self {
        let threshold = match status {
            FilingStatus::Single | FilingStatus::HeadOfHousehold => 200_000.0,
            FilingStatus::MarriedFilingJointly => 250_000.0,
            FilingStatus::MarriedFilingSeparately => 125_000.0,
        };
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn compute(&self, magi: f64, investment_income: f64) -> f64 {
        calculate_niit(magi, investment_income, self.threshold, self.rate)
    }
}
