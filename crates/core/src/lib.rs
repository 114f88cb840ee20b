//! Tiffin Core - Shared types library.
//!
//! This crate provides the data model used by the site engines in
//! `tiffin-storefront`: menu catalog, prices, cart lines, rewards, content
//! and navigation targets.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Menu, price, order, content and section types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
