//! Physical container dimensions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable physical attributes shared by every container kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub tare_weight: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(height: f64, tare_weight: f64, depth: f64) -> Self {
        Self {
            height,
            tare_weight,
            depth,
        }
    }

    /// Validate that every dimension is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.height, "height"),
            (self.tare_weight, "tare_weight"),
            (self.depth, "depth"),
        ];

        for (value, field) in fields {
            ensure_non_negative(value, field)?;
        }

        Ok(())
    }
}

pub(crate) fn ensure_non_negative(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::ContainerDataValidation {
            message: format!("{field} must be a finite non-negative number, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_non_finite_dimensions() {
        let err = Dimensions::new(-1.0, 100.0, 200.0)
            .validate()
            .expect_err("negative height");
        match err {
            Error::ContainerDataValidation { message } => assert!(message.contains("height")),
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(Dimensions::new(200.0, f64::NAN, 200.0).validate().is_err());
        assert!(Dimensions::new(200.0, 100.0, f64::INFINITY)
            .validate()
            .is_err());
        assert!(Dimensions::new(0.0, 0.0, 0.0).validate().is_ok());
    }
}
