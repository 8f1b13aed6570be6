//! Named collections of compiled styles.
//!
//! This module provides:
//!
//! - [`Theme`]: Style names mapped to descriptors, compiled once
//! - [`ThemeError`]: Errors from decoding theme documents
//!
//! Themes can be built fluently or loaded from YAML/JSON maps of
//! `name: descriptor`.

mod error;
#[allow(clippy::module_inception)]
mod theme;

pub use error::ThemeError;
pub use theme::Theme;
