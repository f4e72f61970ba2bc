//! Fuel economy in distance per unit of fuel (km/L, mi/gal, ...).

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FuelEfficiencyError {
    #[error("distance must be greater than zero (got {0})")]
    NonPositiveDistance(f64),

    #[error("distance must not be negative (got {0})")]
    NegativeDistance(f64),

    #[error("fuel used must be greater than zero (got {0})")]
    NonPositiveFuel(f64),

    #[error("efficiency must be greater than zero (got {0})")]
    NonPositiveEfficiency(f64),
}

pub fn calculate_fuel_efficiency(distance: f64, fuel_used: f64) -> Result<f64, FuelEfficiencyError> {
    if distance.is_nan() || distance <= 0.0 {
        return Err(FuelEfficiencyError::NonPositiveDistance(distance));
    }
    if fuel_used.is_nan() || fuel_used <= 0.0 {
        return Err(FuelEfficiencyError::NonPositiveFuel(fuel_used));
    }
    Ok(distance / fuel_used)
}

/// Fuel needed to cover `distance`; a zero distance needs no fuel.
pub fn calculate_fuel_required(distance: f64, efficiency: f64) -> Result<f64, FuelEfficiencyError> {
    if distance.is_nan() || distance < 0.0 {
        return Err(FuelEfficiencyError::NegativeDistance(distance));
    }
    if efficiency.is_nan() || efficiency <= 0.0 {
        return Err(FuelEfficiencyError::NonPositiveEfficiency(efficiency));
    }
    Ok(distance / efficiency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn efficiency_for_valid_inputs() {
        assert_eq!(calculate_fuel_efficiency(100.0, 10.0).unwrap(), 10.0);
        assert_eq!(calculate_fuel_efficiency(0.001, 0.0001).unwrap(), 10.0);
        assert_eq!(calculate_fuel_efficiency(1_000_000.0, 100_000.0).unwrap(), 10.0);
    }

    #[test]
    fn efficiency_rejects_non_positive_inputs() {
        assert!(matches!(
            calculate_fuel_efficiency(0.0, 10.0),
            Err(FuelEfficiencyError::NonPositiveDistance(_))
        ));
        assert!(calculate_fuel_efficiency(-100.0, 10.0).is_err());
        assert!(matches!(
            calculate_fuel_efficiency(100.0, 0.0),
            Err(FuelEfficiencyError::NonPositiveFuel(_))
        ));
        assert!(calculate_fuel_efficiency(100.0, -10.0).is_err());
        assert!(calculate_fuel_efficiency(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn fuel_required_for_valid_inputs() {
        assert_eq!(calculate_fuel_required(100.0, 10.0).unwrap(), 10.0);
        assert_eq!(calculate_fuel_required(0.0, 10.0).unwrap(), 0.0);
        assert_eq!(calculate_fuel_required(1_000_000.0, 100.0).unwrap(), 10_000.0);
        let fuel = calculate_fuel_required(100.0, core::f64::consts::PI).unwrap();
        assert!((fuel - 31.830988618379067).abs() < 1e-14);
    }

    #[test]
    fn fuel_required_rejects_bad_inputs() {
        assert!(matches!(
            calculate_fuel_required(-100.0, 10.0),
            Err(FuelEfficiencyError::NegativeDistance(_))
        ));
        assert!(matches!(
            calculate_fuel_required(100.0, 0.0),
            Err(FuelEfficiencyError::NonPositiveEfficiency(_))
        ));
        assert!(calculate_fuel_required(100.0, -10.0).is_err());
    }

    proptest! {
        #[test]
        fn required_inverts_efficiency(distance in 1.0f64..1e6, fuel in 0.1f64..1e4) {
            let eff = calculate_fuel_efficiency(distance, fuel).unwrap();
            let back = calculate_fuel_required(distance, eff).unwrap();
            prop_assert!((back - fuel).abs() <= fuel * 1e-9);
        }
    }
}
