//! Outlet command codes understood by `control.cgi`

use std::fmt;

/// Command codes accepted by the device's control endpoint.
///
/// The values are fixed by the firmware; code 2 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Switch an outlet off
    Off = 0,
    /// Switch an outlet on
    On = 1,
    /// Power-cycle an outlet
    Reset = 3,
    /// Enable auto-reboot (global, sent with outlet 0)
    AutoRebootOn = 4,
    /// Disable auto-reboot (global, sent with outlet 0)
    AutoRebootOff = 5,
}

impl Command {
    /// Every command the device understands
    pub const ALL: [Command; 5] = [
        Command::Off,
        Command::On,
        Command::Reset,
        Command::AutoRebootOn,
        Command::AutoRebootOff,
    ];

    /// Numeric code sent on the wire
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether the command applies to the whole device rather than one outlet
    pub const fn is_global(self) -> bool {
        matches!(self, Command::AutoRebootOn | Command::AutoRebootOff)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let codes: Vec<u8> = Command::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec![0, 1, 3, 4, 5]);
    }

    #[test]
    fn test_global_commands() {
        assert!(Command::AutoRebootOn.is_global());
        assert!(Command::AutoRebootOff.is_global());
        assert!(!Command::Reset.is_global());
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Command::Reset.to_string(), "3");
    }
}
