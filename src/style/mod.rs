//! Style descriptors and the escape sequences they encode to.
//!
//! This module provides the encoding primitives:
//!
//! - [`Color`]: The eight base colors and their name table
//! - [`Attributes`]: Flag set parsed from `+flags`
//! - [`StyleSpec`] / [`Descriptor`]: Parsed descriptors
//!
//! Nothing here consults the enable switch; see [`crate::Styler`] for that.

mod attributes;
mod codes;
mod color;
mod descriptor;

pub use attributes::Attributes;
pub use codes::{CSI, RESET};
pub use color::{color_code, Color, COLOR_NAMES};
pub use descriptor::{Descriptor, Layer, StyleSpec, RESET_KEYWORD};
