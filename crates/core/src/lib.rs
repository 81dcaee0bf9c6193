//! OrderPing Core - Order message composition library.
//!
//! This crate turns a fetched Shopify order record into a customer-facing
//! status message and a pre-filled WhatsApp deep link:
//! - [`order`] - The order record as returned by the Admin API query
//! - [`contact`] - Phone number resolution across the order's contact fields
//! - [`message`] - Templated order-status message text
//! - [`link`] - WhatsApp `send` deep-link construction
//! - [`builder`] - [`MessageBuilder`], the one-call composition entry point
//!
//! # Architecture
//!
//! The core crate contains only types and pure transformations - no I/O, no
//! HTTP clients. Fetching the order from Shopify lives in `orderping-action`;
//! this crate consumes the already-fetched record synchronously.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod builder;
pub mod contact;
pub mod link;
pub mod message;
pub mod order;

pub use builder::{ComposedMessage, MessageBuilder};
pub use contact::{PhoneSource, ResolvedContact, resolve_phone};
pub use order::{Contact, LineItem, OrderRecord, PhoneField, ShippingAddress};
