//! Typed records decoded from the `<request>` element of WattBox responses.

pub mod info;
pub mod status;

pub use info::WattBoxInfo;
pub use status::BasicStatus;

/// Parse a numeric field reported as an integer string.
pub(crate) fn parse_number(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse::<f64>().ok())
}

/// Parse a `0`/`1` flag field.
pub(crate) fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value.map(str::trim) {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}
