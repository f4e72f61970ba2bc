//! Federal tax vocabulary and small calculators.

pub mod contribution_limits;
pub mod income_types;
pub mod niit;

pub use contribution_limits::{ContributionLimits, RetirementAccountType, contribution_limits, has_published_limits};
pub use income_types::IncomeType;
pub use niit::{NiitAmount, NiitParams, calculate_niit};
