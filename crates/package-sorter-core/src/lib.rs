pub mod category;
pub mod config;
pub mod error;
pub mod input;
pub mod measurement;
pub mod samples;

pub use category::{
    classify, describe, Category, CategoryTally, DetailedResult, Dimensions, BULKY_DIMENSION_CM,
    BULKY_VOLUME_CM3, HEAVY_MASS_KG,
};
pub use config::{Config, DisplayConfig, OutputFormat};
pub use error::{Field, InvalidReason, Result, SorterError};
pub use input::{parse_measurement, parse_value};
pub use measurement::PackageMeasurement;
pub use samples::{SamplePackage, SAMPLE_PACKAGES};
