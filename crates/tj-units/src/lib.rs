//! tj-units: stateless unit conversion for the turbojet tools.
//!
//! The engine core only ever sees SI values. This crate sits on the input and
//! output boundaries:
//! - [`parse_quantity`] turns unit-tagged text ("-43.35C", "30.8kPa", "36000ft")
//!   into canonical SI numbers
//! - [`convert`] holds the named one-way conversions
//! - [`UnitSystem`] formats SI results back for display

pub mod convert;
pub mod quantity;
pub mod system;

pub use quantity::{Quantity, UnitError, parse_quantity};
pub use system::UnitSystem;
