//! # wattbox-parser
//!
//! XML parsing for WattBox responses. The device answers every request with
//! a `<request>` document; this crate decodes it into [`BasicStatus`] (outlet
//! commands and status polls) or [`WattBoxInfo`] (device metadata).
//!
//! ## Usage
//!
//! ```rust
//! use wattbox_parser::{decode, BasicStatus, Decoded};
//!
//! let body = b"<request><outlet_status>1,0</outlet_status></request>".to_vec();
//! match decode::<BasicStatus>(body) {
//!     Decoded::Record(status) => assert_eq!(status.outlets().len(), 2),
//!     Decoded::RawFallback(_) | Decoded::Failed(_) => unreachable!(),
//! }
//! ```

pub mod decode;
pub mod error;
pub mod outlet;
pub mod records;

pub use decode::{decode, parse_request, Decoded};
pub use error::{ParseError, ParseResult};
pub use outlet::{Outlet, OutletState};
pub use records::{BasicStatus, WattBoxInfo};
