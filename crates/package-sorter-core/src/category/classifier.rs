//! Package Classifier
//!
//! 寸法と重量から振り分け先カテゴリを決定する。状態を持たない純粋関数。

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::measurement::PackageMeasurement;

use super::stack::Category;
use super::thresholds::{is_bulky, is_heavy};

/// Package dimensions in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub length: f64,
}

/// Category together with the facts that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailedResult {
    pub dimensions: Dimensions,
    /// width × height × length (cm³)
    pub volume_cm3: f64,
    pub mass_kg: f64,
    pub is_bulky: bool,
    pub is_heavy: bool,
    /// Dispatch stack
    #[serde(rename = "stack")]
    pub category: Category,
}

/// Classify a package.
///
/// Fails with [`SorterError::InvalidInput`](crate::SorterError::InvalidInput)
/// when any value is negative or not a finite number.
///
/// ```rust
/// use package_sorter_core::{classify, Category};
///
/// assert_eq!(classify(50.0, 50.0, 50.0, 10.0).unwrap(), Category::Standard);
/// assert_eq!(classify(100.0, 100.0, 100.0, 10.0).unwrap(), Category::Special);
/// assert_eq!(classify(200.0, 100.0, 100.0, 25.0).unwrap(), Category::Rejected);
/// assert!(classify(-1.0, 50.0, 50.0, 10.0).is_err());
/// ```
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
    classify_measurement(&PackageMeasurement::new(width, height, length, mass))
}

/// Classify a package and report volume, bulk and weight facts.
pub fn describe(width: f64, height: f64, length: f64, mass: f64) -> Result<DetailedResult> {
    describe_measurement(&PackageMeasurement::new(width, height, length, mass))
}

pub fn classify_measurement(measurement: &PackageMeasurement) -> Result<Category> {
    measurement.validate()?;
    let (_, bulky, heavy) = facts(measurement);
    Ok(Category::from_flags(bulky, heavy))
}

pub fn describe_measurement(measurement: &PackageMeasurement) -> Result<DetailedResult> {
    let category = classify_measurement(measurement)?;
    let (volume, bulky, heavy) = facts(measurement);

    Ok(DetailedResult {
        dimensions: Dimensions {
            width: measurement.width,
            height: measurement.height,
            length: measurement.length,
        },
        volume_cm3: volume,
        mass_kg: measurement.mass,
        is_bulky: bulky,
        is_heavy: heavy,
        category,
    })
}

/// (volume, is_bulky, is_heavy) for an already validated measurement
fn facts(measurement: &PackageMeasurement) -> (f64, bool, bool) {
    let volume = measurement.volume();
    (
        volume,
        is_bulky(volume, measurement.dimensions()),
        is_heavy(measurement.mass),
    )
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // Covers both sides of every threshold
    fn dimension() -> impl Strategy<Value = f64> {
        prop_oneof![0.0f64..200.0, Just(0.0), Just(100.0), Just(150.0)]
    }

    fn mass() -> impl Strategy<Value = f64> {
        prop_oneof![0.0f64..40.0, Just(20.0)]
    }

    proptest! {
        #[test]
        fn prop_describe_agrees_with_classify(
            w in dimension(), h in dimension(), l in dimension(), m in mass()
        ) {
            let category = classify(w, h, l, m).unwrap();
            let report = describe(w, h, l, m).unwrap();
            prop_assert_eq!(report.category, category);
            prop_assert_eq!(category, Category::from_flags(report.is_bulky, report.is_heavy));
            prop_assert!(Category::ALL.contains(&category));
        }

        #[test]
        fn prop_classification_is_deterministic(
            w in dimension(), h in dimension(), l in dimension(), m in mass()
        ) {
            prop_assert_eq!(classify(w, h, l, m).unwrap(), classify(w, h, l, m).unwrap());
        }

        #[test]
        fn prop_monotone_in_each_input(
            w in dimension(), h in dimension(), l in dimension(), m in mass(),
            delta in 0.0f64..100.0
        ) {
            let base = classify(w, h, l, m).unwrap();
            prop_assert!(classify(w + delta, h, l, m).unwrap() >= base);
            prop_assert!(classify(w, h + delta, l, m).unwrap() >= base);
            prop_assert!(classify(w, h, l + delta, m).unwrap() >= base);
            prop_assert!(classify(w, h, l, m + delta).unwrap() >= base);
        }

        #[test]
        fn prop_symmetric_in_dimensions(
            w in dimension(), h in dimension(), l in dimension(), m in mass()
        ) {
            let base = classify(w, h, l, m).unwrap();
            for (a, b, c) in [(w, l, h), (h, w, l), (h, l, w), (l, w, h), (l, h, w)] {
                prop_assert_eq!(classify(a, b, c, m).unwrap(), base);
            }
        }

        #[test]
        fn prop_negative_input_always_rejected(
            w in dimension(), h in dimension(), l in dimension(), m in mass(),
            bad in -1000.0f64..-0.001,
            slot in 0usize..4
        ) {
            let mut values = [w, h, l, m];
            values[slot] = bad;
            let result = classify(values[0], values[1], values[2], values[3]);
            prop_assert!(result.unwrap_err().is_invalid_input());
        }

        #[test]
        fn prop_nan_always_rejected(
            w in dimension(), h in dimension(), l in dimension(), m in mass(),
            slot in 0usize..4
        ) {
            let mut values = [w, h, l, m];
            values[slot] = f64::NAN;
            let result = describe(values[0], values[1], values[2], values[3]);
            prop_assert!(result.unwrap_err().is_invalid_input());
        }
    }
}
