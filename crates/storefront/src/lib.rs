//! Oud Éire Storefront core library.
//!
//! The client-side interactivity of the storefront, restructured so that
//! none of the contracts require a live UI: the cart and search modules
//! mutate their own state and publish change notifications; a separate
//! presentation collaborator (the CLI, a future web layer) subscribes
//! and renders.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration with defaults
//! - [`error`] - Unified error type
//! - [`storage`] - Key-value persistence adapter (browser-local-storage
//!   stand-in)
//! - [`catalog`] - Read-only, ordered product catalog
//! - [`cart`] - Cart store: add/remove/update, persistence, snapshots
//! - [`search`] - Substring/category search and the debounced session

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod storage;
