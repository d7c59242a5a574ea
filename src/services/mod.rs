//! Service layer: chart computation and report rendering.
//!
//! Services sit between the HTTP handlers and the ephemeris backend.
//! They own the only logic original to this engine: house bucketing,
//! chart assembly, and the fixed-coordinate PDF layout.

pub mod houses;

pub mod kundali;

pub mod layout;

pub mod pdf;

pub use houses::house_number;
pub use kundali::{compute_kundali, KundaliChart};
pub use pdf::{render_report, report_filename};
