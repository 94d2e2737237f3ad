//! Dispatch thresholds
//!
//! 分類で使う閾値。すべて「以上」で判定する（境界値を含む）。

/// Volume at or above which a package is bulky (cm³)
pub const BULKY_VOLUME_CM3: f64 = 1_000_000.0;

/// Any single dimension at or above this is bulky (cm)
pub const BULKY_DIMENSION_CM: f64 = 150.0;

/// Mass at or above which a package is heavy (kg)
pub const HEAVY_MASS_KG: f64 = 20.0;

/// Bulk predicate over a volume and the three dimensions.
pub fn is_bulky(volume: f64, dimensions: [f64; 3]) -> bool {
    volume >= BULKY_VOLUME_CM3 || dimensions.iter().any(|&d| d >= BULKY_DIMENSION_CM)
}

pub fn is_heavy(mass: f64) -> bool {
    mass >= HEAVY_MASS_KG
}
