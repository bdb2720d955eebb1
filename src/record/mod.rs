//! Common record interface.
//!
//! Both scenarios (emergency calls and library loan requests) are plain
//! structs that expose their ordering fields through the traits defined
//! here. The queue, sort engine and dispatch engine are generic over
//! these traits and never see scenario-specific payload.

mod types;

pub use types::{Dispatchable, Prioritized, ReportKeyed, Timestamp};
