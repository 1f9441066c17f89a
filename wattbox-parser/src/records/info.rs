//! Device metadata record returned by `wattbox_info.xml`.

use serde::{Deserialize, Serialize};

use crate::outlet::{zip_outlets, Outlet};
use crate::records::{parse_flag, parse_number};

/// Device information served at `/wattbox_info.xml`.
///
/// Carries everything [`BasicStatus`](crate::BasicStatus) does plus power
/// and UPS telemetry. Values are kept as reported; the accessor methods
/// convert the numeric ones into units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename = "request")]
pub struct WattBoxInfo {
    #[serde(default)]
    pub host_name: Option<String>,

    #[serde(default)]
    pub hardware_version: Option<String>,

    #[serde(default)]
    pub serial_number: Option<String>,

    #[serde(default)]
    pub site_ip: Option<String>,

    #[serde(default)]
    pub connect_status: Option<String>,

    #[serde(default)]
    pub auto_reboot: Option<String>,

    #[serde(default)]
    pub outlet_name: Option<String>,

    #[serde(default)]
    pub outlet_status: Option<String>,

    #[serde(default)]
    pub outlet_method: Option<String>,

    #[serde(default)]
    pub led_status: Option<String>,

    #[serde(default)]
    pub safe_voltage_status: Option<String>,

    /// Voltage in tenths of a volt
    #[serde(default)]
    pub voltage_value: Option<String>,

    /// Current in tenths of an amp
    #[serde(default)]
    pub current_value: Option<String>,

    /// Power in watts
    #[serde(default)]
    pub power_value: Option<String>,

    #[serde(default)]
    pub power_lost: Option<String>,

    #[serde(default)]
    pub cloud_status: Option<String>,

    #[serde(default)]
    pub audible_alarm: Option<String>,

    #[serde(default)]
    pub battery_test: Option<String>,

    /// Battery charge in percent
    #[serde(default)]
    pub battery_charge: Option<String>,

    #[serde(default)]
    pub battery_health: Option<String>,

    /// Battery load in percent
    #[serde(default)]
    pub battery_load: Option<String>,

    /// Estimated runtime on battery, in minutes
    #[serde(default)]
    pub est_run_time: Option<String>,

    #[serde(default)]
    pub has_ups: Option<String>,

    #[serde(default)]
    pub mute: Option<String>,
}

impl WattBoxInfo {
    /// One entry per outlet, zipped from the outlet lists
    pub fn outlets(&self) -> Vec<Outlet> {
        zip_outlets(
            self.outlet_name.as_deref(),
            self.outlet_status.as_deref(),
            self.outlet_method.as_deref(),
        )
    }

    /// Line voltage in volts
    pub fn voltage(&self) -> Option<f64> {
        parse_number(self.voltage_value.as_deref()).map(|v| v / 10.0)
    }

    /// Total current draw in amps
    pub fn current(&self) -> Option<f64> {
        parse_number(self.current_value.as_deref()).map(|v| v / 10.0)
    }

    /// Total power draw in watts
    pub fn power(&self) -> Option<f64> {
        parse_number(self.power_value.as_deref())
    }

    /// Whether a UPS is attached
    pub fn has_ups(&self) -> Option<bool> {
        parse_flag(self.has_ups.as_deref())
    }

    /// Whether auto-reboot is enabled
    pub fn auto_reboot_enabled(&self) -> Option<bool> {
        parse_flag(self.auto_reboot.as_deref())
    }
}
