//! Oud Éire Core - Shared types library.
//!
//! This crate provides common types used across all Oud Éire components:
//! - `storefront` - Cart and search logic for the storefront
//! - `cli` - Command-line driver standing in for the presentation layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no timers.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, badges, and the
//!   product/cart records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
