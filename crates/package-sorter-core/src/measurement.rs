//! Package measurements
//!
//! 呼び出し側が構築し、1回の分類で消費される入力値。

use serde::{Deserialize, Serialize};

use crate::category::{self, Category, DetailedResult};
use crate::error::{Field, InvalidReason, Result, SorterError};

/// Width, height and length in centimeters, mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageMeasurement {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

impl PackageMeasurement {
    pub const fn new(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    /// Value of a single field
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Width => self.width,
            Field::Height => self.height,
            Field::Length => self.length,
            Field::Mass => self.mass,
        }
    }

    /// Check every field in order and report the first violation.
    ///
    /// NaN and infinities are reported as [`InvalidReason::NotANumber`];
    /// `-0.0` counts as zero.
    pub fn validate(&self) -> Result<()> {
        for field in Field::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(SorterError::invalid_input(field, InvalidReason::NotANumber));
            }
            if value < 0.0 {
                return Err(SorterError::invalid_input(field, InvalidReason::Negative));
            }
        }
        Ok(())
    }

    pub fn dimensions(&self) -> [f64; 3] {
        [self.width, self.height, self.length]
    }

    /// Volume in cm³.
    ///
    /// Dimensions are multiplied smallest first so the product does not
    /// depend on which axis a value was measured along.
    pub fn volume(&self) -> f64 {
        let mut dims = self.dimensions();
        dims.sort_by(f64::total_cmp);
        dims[0] * dims[1] * dims[2]
    }

    pub fn classify(&self) -> Result<Category> {
        category::classify_measurement(self)
    }

    pub fn describe(&self) -> Result<DetailedResult> {
        category::describe_measurement(self)
    }
}

impl From<(f64, f64, f64, f64)> for PackageMeasurement {
    fn from((width, height, length, mass): (f64, f64, f64, f64)) -> Self {
        Self::new(width, height, length, mass)
    }
}
