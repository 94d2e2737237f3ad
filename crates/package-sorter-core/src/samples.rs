//! Sample packages used by the demonstration run.

use crate::measurement::PackageMeasurement;

/// Labelled sample package
#[derive(Debug, Clone, Copy)]
pub struct SamplePackage {
    pub label: &'static str,
    pub measurement: PackageMeasurement,
}

const fn sample(label: &'static str, w: f64, h: f64, l: f64, m: f64) -> SamplePackage {
    SamplePackage {
        label,
        measurement: PackageMeasurement::new(w, h, l, m),
    }
}

pub const SAMPLE_PACKAGES: &[SamplePackage] = &[
    sample("Small electronics box", 30.0, 20.0, 10.0, 2.0),
    sample("Medium clothing box", 40.0, 30.0, 20.0, 5.0),
    sample(
        "Exact volume threshold (1,000,000 cm³)",
        100.0,
        100.0,
        100.0,
        10.0,
    ),
    sample("Just over volume threshold", 101.0, 100.0, 100.0, 10.0),
    sample("Oversized but light item", 150.0, 50.0, 50.0, 10.0),
    sample("Heavy but compact item", 50.0, 50.0, 50.0, 20.0),
    sample("Both bulky and heavy (rejected)", 200.0, 100.0, 100.0, 25.0),
    sample("Heavy appliance box", 120.0, 80.0, 60.0, 35.0),
    sample("Long industrial pipe", 500.0, 10.0, 10.0, 100.0),
    sample("Very small package", 0.1, 0.1, 0.1, 0.1),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, CategoryTally};

    #[test]
    fn test_samples_are_valid() {
        for s in SAMPLE_PACKAGES {
            assert!(s.measurement.validate().is_ok(), "{} is invalid", s.label);
        }
    }

    #[test]
    fn test_sample_distribution() {
        let tally: CategoryTally = SAMPLE_PACKAGES
            .iter()
            .map(|s| s.measurement.classify().unwrap())
            .collect();

        assert_eq!(tally.count(Category::Standard), 3);
        assert_eq!(tally.count(Category::Special), 5);
        assert_eq!(tally.count(Category::Rejected), 2);
        assert_eq!(tally.total(), SAMPLE_PACKAGES.len());
    }
}
