//! Core types for the Tiffin site.
//!
//! This module provides type-safe wrappers for menu, cart and loyalty data.

pub mod content;
pub mod menu;
pub mod order;
pub mod price;
pub mod section;

pub use content::{About, ContentDoc, Footer, Hero, PolicyLink, SocialLink};
pub use menu::{Catalog, Category, MenuItem};
pub use order::{CartLine, RedemptionOption};
pub use price::{Price, PriceError};
pub use section::{Section, Sender};
