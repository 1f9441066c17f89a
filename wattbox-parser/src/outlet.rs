//! Per-outlet view over the comma-separated outlet lists.
//!
//! The device reports outlet data as parallel comma-separated lists
//! (`outlet_name`, `outlet_status`, `outlet_method`). These helpers zip them
//! into one entry per outlet.

use serde::{Deserialize, Serialize};

/// Power state of a single outlet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutletState {
    On,
    Off,
    /// The device reported a value other than `0` or `1`, or nothing at all
    Unknown,
}

impl OutletState {
    /// Parse a single outlet status flag as reported by the device
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim() {
            "1" => OutletState::On,
            "0" => OutletState::Off,
            _ => OutletState::Unknown,
        }
    }
}

/// One outlet as described by a status or info response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlet {
    /// 1-based outlet index, as used by outlet commands
    pub index: u32,
    /// Name configured on the device
    pub name: String,
    /// Current power state
    pub state: OutletState,
    /// Reset method flag, when reported
    pub method: Option<String>,
}

/// Split a comma-separated device list, ignoring a missing field.
pub(crate) fn split_list(value: Option<&str>) -> Vec<&str> {
    match value {
        Some(list) if !list.trim().is_empty() => list.split(',').map(str::trim).collect(),
        _ => Vec::new(),
    }
}

/// Zip the parallel outlet lists into one entry per outlet.
///
/// The outlet count is the longest of the name and status lists; missing
/// names become `Outlet N`, missing states become [`OutletState::Unknown`].
pub(crate) fn zip_outlets(
    names: Option<&str>,
    statuses: Option<&str>,
    methods: Option<&str>,
) -> Vec<Outlet> {
    let names = split_list(names);
    let statuses = split_list(statuses);
    let methods = split_list(methods);
    let count = names.len().max(statuses.len());

    (0..count)
        .map(|i| {
            let index = u32::try_from(i + 1).unwrap_or(u32::MAX);
            Outlet {
                index,
                name: names
                    .get(i)
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| format!("Outlet {}", index)),
                state: statuses
                    .get(i)
                    .map(|flag| OutletState::from_flag(flag))
                    .unwrap_or(OutletState::Unknown),
                method: methods.get(i).map(|m| m.to_string()),
            }
        })
        .collect()
}
