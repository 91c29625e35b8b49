//! Registry configuration.
//!
//! Defaults match the operator console: new containers are 200 high, 200 deep,
//! weigh 100 empty and carry up to 1000. Each value can be overridden through
//! the environment:
//!
//! - `KONSHIP_DEFAULT_HEIGHT`
//! - `KONSHIP_DEFAULT_TARE_WEIGHT`
//! - `KONSHIP_DEFAULT_DEPTH`
//! - `KONSHIP_DEFAULT_MAX_PAYLOAD`
//! - `KONSHIP_WEIGHT_POLICY` (`enforced` or `unenforced`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::container::Dimensions;
use crate::error::{Error, Result};

pub const ENV_DEFAULT_HEIGHT: &str = "KONSHIP_DEFAULT_HEIGHT";
pub const ENV_DEFAULT_TARE_WEIGHT: &str = "KONSHIP_DEFAULT_TARE_WEIGHT";
pub const ENV_DEFAULT_DEPTH: &str = "KONSHIP_DEFAULT_DEPTH";
pub const ENV_DEFAULT_MAX_PAYLOAD: &str = "KONSHIP_DEFAULT_MAX_PAYLOAD";
pub const ENV_WEIGHT_POLICY: &str = "KONSHIP_WEIGHT_POLICY";

/// How a ship's `max_weight_capacity` is treated when loading containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPolicy {
    /// Only the container count is enforced. Loads that push a ship past its
    /// weight capacity succeed but are logged as warnings.
    #[default]
    Unenforced,
    /// Loads that would exceed the weight capacity are rejected.
    Enforced,
}

impl fmt::Display for WeightPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightPolicy::Unenforced => f.write_str("unenforced"),
            WeightPolicy::Enforced => f.write_str("enforced"),
        }
    }
}

impl FromStr for WeightPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unenforced" | "off" => Ok(WeightPolicy::Unenforced),
            "enforced" | "on" => Ok(WeightPolicy::Enforced),
            other => Err(Error::InvalidConfig {
                message: format!("unknown weight policy '{other}'; expected enforced or unenforced"),
            }),
        }
    }
}

/// Settings applied by the [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Dimensions given to containers created without explicit ones.
    pub default_dimensions: Dimensions,
    /// Max payload given to containers created without an explicit one.
    pub default_max_payload: f64,
    pub weight_policy: WeightPolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_dimensions: Dimensions::new(200.0, 100.0, 200.0),
            default_max_payload: 1000.0,
            weight_policy: WeightPolicy::Unenforced,
        }
    }
}

impl RegistryConfig {
    /// Defaults overlaid with any `KONSHIP_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values produced by `lookup`.
    ///
    /// `lookup` receives an environment variable name and returns its value,
    /// which keeps parsing testable without touching process state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let dims = &mut config.default_dimensions;
        for (key, slot) in [
            (ENV_DEFAULT_HEIGHT, &mut dims.height),
            (ENV_DEFAULT_TARE_WEIGHT, &mut dims.tare_weight),
            (ENV_DEFAULT_DEPTH, &mut dims.depth),
        ] {
            if let Some(raw) = lookup(key) {
                *slot = parse_number(key, &raw)?;
            }
        }
        if let Some(raw) = lookup(ENV_DEFAULT_MAX_PAYLOAD) {
            config.default_max_payload = parse_number(ENV_DEFAULT_MAX_PAYLOAD, &raw)?;
        }
        if let Some(raw) = lookup(ENV_WEIGHT_POLICY) {
            config.weight_policy = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.default_dimensions
            .validate()
            .and_then(|()| {
                crate::container::attributes::ensure_non_negative(
                    self.default_max_payload,
                    "default_max_payload",
                )
            })
            .map_err(|err| Error::InvalidConfig {
                message: err.to_string(),
            })
    }
}

fn parse_number(key: &str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|e| Error::InvalidConfig {
        message: format!("{key} must be a number, got '{raw}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = RegistryConfig::from_lookup(|_| None).expect("defaults");
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.default_max_payload, 1000.0);
        assert_eq!(config.weight_policy, WeightPolicy::Unenforced);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            (ENV_DEFAULT_HEIGHT, "250"),
            (ENV_DEFAULT_MAX_PAYLOAD, " 2000 "),
            (ENV_WEIGHT_POLICY, "Enforced"),
        ]))
        .expect("valid overrides");
        assert_eq!(config.default_dimensions.height, 250.0);
        assert_eq!(config.default_dimensions.depth, 200.0);
        assert_eq!(config.default_max_payload, 2000.0);
        assert_eq!(config.weight_policy, WeightPolicy::Enforced);
    }

    #[test]
    fn rejects_unparseable_and_negative_values() {
        let err = RegistryConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_DEPTH, "deep")]))
            .expect_err("non-numeric depth");
        assert!(err.to_string().contains(ENV_DEFAULT_DEPTH));

        let err = RegistryConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_MAX_PAYLOAD, "-1")]))
            .expect_err("negative payload");
        assert!(matches!(err, Error::InvalidConfig { .. }));

        let err = RegistryConfig::from_lookup(lookup_from(&[(ENV_WEIGHT_POLICY, "maybe")]))
            .expect_err("unknown policy");
        assert!(err.to_string().contains("maybe"));
    }
}
