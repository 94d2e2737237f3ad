//! Parsing of user-entered measurement values.

use crate::error::{Field, InvalidReason, Result, SorterError};
use crate::measurement::PackageMeasurement;

/// Parse a single value for `field`.
///
/// Surrounding whitespace is ignored. Text that is not a number, or that
/// parses to NaN or an infinity, is rejected as [`InvalidReason::NotANumber`].
/// Sign is not checked here; classification validates it.
pub fn parse_value(field: Field, text: &str) -> Result<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| SorterError::invalid_input(field, InvalidReason::NotANumber))?;

    if !value.is_finite() {
        return Err(SorterError::invalid_input(field, InvalidReason::NotANumber));
    }
    Ok(value)
}

/// Parse four values in width, height, length, mass order.
pub fn parse_measurement<S: AsRef<str>>(values: [S; 4]) -> Result<PackageMeasurement> {
    let [w, h, l, m] = values;
    Ok(PackageMeasurement::new(
        parse_value(Field::Width, w.as_ref())?,
        parse_value(Field::Height, h.as_ref())?,
        parse_value(Field::Length, l.as_ref())?,
        parse_value(Field::Mass, m.as_ref())?,
    ))
}
