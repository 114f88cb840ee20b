//! Tiffin Storefront library.
//!
//! The client-side state machine of the restaurant site: cart, loyalty
//! ledger, menu search and the chat assistant's command interpreter, plus
//! the collaborators they are wired to (data sources, persistence,
//! rendering).
//!
//! # Modules
//!
//! - [`cart`] - Cart engine with exact decimal totals
//! - [`loyalty`] - Persisted loyalty point ledger
//! - [`assistant`] - Chat command interpreter
//! - [`search`] - Menu search filter
//! - [`catalog`] - Catalog store and data sources
//! - [`state`] - Session state tying the engines to a renderer and store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod loyalty;
pub mod newsletter;
pub mod quiz;
pub mod render;
pub mod search;
pub mod state;
pub mod storage;
pub mod telemetry;
pub mod videos;

pub use error::{Result, StorefrontError};
pub use state::{CheckoutReceipt, SiteState};
