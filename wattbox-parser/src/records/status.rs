//! Basic status record returned by `control.cgi`.

use serde::{Deserialize, Serialize};

use crate::outlet::{zip_outlets, Outlet};
use crate::records::parse_flag;

/// Status returned by every `control.cgi` request.
///
/// The firmware answers outlet commands with the device's current state:
/// ```xml
/// <request>
///   <host_name>Rack A</host_name>
///   <auto_reboot>0</auto_reboot>
///   <outlet_name>Router,Switch,NAS</outlet_name>
///   <outlet_status>1,0,1</outlet_status>
///   ...
/// </request>
/// ```
/// Fields are kept as the device reports them; list fields stay
/// comma-separated. Elements the firmware adds later are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename = "request")]
pub struct BasicStatus {
    #[serde(default)]
    pub host_name: Option<String>,

    #[serde(default)]
    pub hardware_version: Option<String>,

    #[serde(default)]
    pub serial_number: Option<String>,

    /// Comma-separated list of sites monitored for auto-reboot
    #[serde(default)]
    pub site_ip: Option<String>,

    /// Comma-separated reachability flags, one per monitored site
    #[serde(default)]
    pub connect_status: Option<String>,

    /// Auto-reboot flag (`0`/`1`)
    #[serde(default)]
    pub auto_reboot: Option<String>,

    #[serde(default)]
    pub outlet_name: Option<String>,

    /// Comma-separated power flags, one per outlet
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
}

impl BasicStatus {
    /// One entry per outlet, zipped from the outlet lists
    pub fn outlets(&self) -> Vec<Outlet> {
        zip_outlets(
            self.outlet_name.as_deref(),
            self.outlet_status.as_deref(),
            self.outlet_method.as_deref(),
        )
    }

    /// Whether auto-reboot is enabled, if the device reported it
    pub fn auto_reboot_enabled(&self) -> Option<bool> {
        parse_flag(self.auto_reboot.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::parse_request;
    use crate::outlet::OutletState;

    #[test]
    fn test_parse_basic_status() {
        let xml = r#"<?xml version="1.0"?>
<request>
  <host_name>Rack A</host_name>
  <auto_reboot>1</auto_reboot>
  <outlet_name>Router,Switch</outlet_name>
  <outlet_status>1,0</outlet_status>
  <outlet_method>1,1</outlet_method>
</request>"#;

        let status: BasicStatus = parse_request(xml).unwrap();

        assert_eq!(status.host_name.as_deref(), Some("Rack A"));
        assert_eq!(status.auto_reboot_enabled(), Some(true));

        let outlets = status.outlets();
        assert_eq!(outlets.len(), 2);
        assert_eq!(outlets[0].name, "Router");
        assert_eq!(outlets[0].state, OutletState::On);
        assert_eq!(outlets[1].state, OutletState::Off);
    }

    #[test]
    fn test_unknown_elements_are_ignored() {
        let xml = "<request><future_field>x</future_field><auto_reboot>0</auto_reboot></request>";
        let status: BasicStatus = parse_request(xml).unwrap();
        assert_eq!(status.auto_reboot_enabled(), Some(false));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let status: BasicStatus = parse_request("<request></request>").unwrap();
        assert_eq!(status, BasicStatus::default());
        assert!(status.outlets().is_empty());
        assert_eq!(status.auto_reboot_enabled(), None);
    }
}
