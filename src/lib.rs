#![doc = include_str!("../README.md")]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]

pub mod class;
pub mod feedback;
pub mod icon;
pub mod prelude;
pub mod style;

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;
