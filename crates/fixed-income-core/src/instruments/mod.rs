//! Fixed income instrument types.
//!
//! - [`Bond`]: Immutable, validated fixed coupon bond
//! - [`BondBuilder`]: Fluent construction of a [`Bond`]

mod bond;

pub use bond::{Bond, BondBuilder};
