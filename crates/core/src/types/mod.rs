//! Core types for Oud Éire.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod badge;
pub mod id;
pub mod line_item;
pub mod price;
pub mod product;

pub use badge::{Badge, BadgeError};
pub use id::*;
pub use line_item::CartLineItem;
pub use price::Price;
pub use product::Product;
