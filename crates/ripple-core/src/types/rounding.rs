//! Rounding applied when metrics are emitted.
//!
//! In-memory values keep full precision; only serialization rounds.

use serde::Serializer;

use crate::constants::REPORT_DECIMALS;

/// Round to the report precision (3 decimal places).
pub fn round3(value: f64) -> f64 {
    let factor = 10f64.powi(REPORT_DECIMALS);
    (value * factor).round() / factor
}

/// `serialize_with` helper emitting an `f64` rounded to report precision.
pub fn serialize_rounded<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round3(*value))
}
