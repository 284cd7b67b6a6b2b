use serde::{Deserialize, Serialize};

use crate::optimizer::DispatchError;

/// Physical limits of the storage asset.
///
/// Powers and energies share whatever unit system the price series uses
/// (typically MW / MWh against a per-MWh price). Constructed once per
/// invocation and never mutated by solving.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageParams {
    /// Maximum stored energy, > 0.
    pub capacity: f64,
    /// Maximum charge and discharge power per step, > 0.
    pub p_max: f64,
    /// Charge efficiency, in (0, 1].
    pub eff_ch: f64,
    /// Discharge efficiency, in (0, 1].
    pub eff_dis: f64,
    /// Initial stored energy, in [0, capacity].
    pub soc_init: f64,
}

impl Default for StorageParams {
    fn default() -> Self {
        Self {
            capacity: 100.0,
            p_max: 50.0,
            eff_ch: 0.95,
            eff_dis: 0.95,
            soc_init: 0.0,
        }
    }
}

impl StorageParams {
    /// Checks every field against its documented bounds, naming the first
    /// offending field.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            return Err(DispatchError::invalid_parameter(
                "capacity",
                format!("must be a positive finite number, got {}", self.capacity),
            ));
        }
        if !self.p_max.is_finite() || self.p_max <= 0.0 {
            return Err(DispatchError::invalid_parameter(
                "p_max",
                format!("must be a positive finite number, got {}", self.p_max),
            ));
        }
        if !self.eff_ch.is_finite() || self.eff_ch <= 0.0 || self.eff_ch > 1.0 {
            return Err(DispatchError::invalid_parameter(
                "eff_ch",
                format!("must lie in (0, 1], got {}", self.eff_ch),
            ));
        }
        if !self.eff_dis.is_finite() || self.eff_dis <= 0.0 || self.eff_dis > 1.0 {
            return Err(DispatchError::invalid_parameter(
                "eff_dis",
                format!("must lie in (0, 1], got {}", self.eff_dis),
            ));
        }
        if !self.soc_init.is_finite() || self.soc_init < 0.0 || self.soc_init > self.capacity {
            return Err(DispatchError::invalid_parameter(
                "soc_init",
                format!(
                    "must lie in [0, capacity={}], got {}",
                    self.capacity, self.soc_init
                ),
            ));
        }
        Ok(())
    }

    /// Fraction of energy recovered after one full charge-discharge cycle.
    pub fn round_trip_efficiency(&self) -> f64 {
        self.eff_ch * self.eff_dis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        let params = StorageParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.capacity, 100.0);
        assert_eq!(params.p_max, 50.0);
        assert_eq!(params.soc_init, 0.0);
        assert!((params.round_trip_efficiency() - 0.9025).abs() < 1e-12);
    }

    #[test]
    fn soc_init_above_capacity_names_the_field() {
        let params = StorageParams {
            soc_init: 150.0,
            ..StorageParams::default()
        };
        match params.validate() {
            Err(DispatchError::InvalidParameter { field, .. }) => assert_eq!(field, "soc_init"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_capacity_is_rejected() {
        let params = StorageParams {
            capacity: f64::NAN,
            ..StorageParams::default()
        };
        match params.validate() {
            Err(DispatchError::InvalidParameter { field, .. }) => assert_eq!(field, "capacity"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn efficiency_above_one_is_rejected() {
        let params = StorageParams {
            eff_ch: 1.05,
            ..StorageParams::default()
        };
        match params.validate() {
            Err(DispatchError::InvalidParameter { field, .. }) => assert_eq!(field, "eff_ch"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
