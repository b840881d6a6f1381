//! # Fixed Income Core
//!
//! Validated instrument types for fixed income analytics.
//!
//! - **Instruments**: [`Bond`], an immutable fixed coupon bond that can only be
//!   constructed from inputs satisfying its business rules
//! - **Errors**: [`BondError`], distinguishing malformed input from
//!   out-of-range values
//!
//! ## Example
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use fixed_income_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let utc = FixedOffset::east_opt(0).unwrap();
//! let result = Bond::builder()
//!     .isin("GB1234567890")
//!     .currency("GBP")
//!     .face_value(dec!(-1000))
//!     .maturity_date(utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap())
//!     .coupon_rate(dec!(5.0))
//!     .issue_date(utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap())
//!     .coupon_frequency(2)
//!     .build();
//!
//! let err = result.unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! assert_eq!(err.param(), Some("face_value"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod instruments;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondError, BondResult, ErrorKind};
    pub use crate::instruments::{Bond, BondBuilder};
}

// Re-export commonly used types at crate root
pub use error::{BondError, BondResult, ErrorKind};
pub use instruments::{Bond, BondBuilder};
