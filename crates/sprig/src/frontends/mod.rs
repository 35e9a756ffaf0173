//! Language frontends for sprig
//!
//! This module contains implementations of the `LanguageFrontend` trait.

pub mod go;

pub use go::{CharStyle, GoFrontend};
