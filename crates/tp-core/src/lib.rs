//! tp-core: shared foundation for thermopid.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error type)

pub mod error;
pub mod numeric;

pub use error::TpError;
pub use numeric::*;
