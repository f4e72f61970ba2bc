//! Vehicle-related calculators: IRS standard mileage rates and fuel economy.

pub mod fuel;
pub mod mileage;

pub use fuel::{FuelEfficiencyError, calculate_fuel_efficiency, calculate_fuel_required};
pub use mileage::{MileageCategory, MileageRate, mileage_deduction, mileage_rate};
