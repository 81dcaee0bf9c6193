//! OrderPing Action - order fetch and message preparation.
//!
//! The service side of the order-details messaging action:
//! - [`config`] - Environment configuration (store, token, country code)
//! - [`error`] - The action error taxonomy
//! - [`shopify`] - Admin GraphQL client fetching the order record
//! - [`action`] - The fetch-then-compose pipeline with stale-fetch guard
//!
//! The flow mirrors how the action is used from an order-detail view: the
//! host hands over an order id, [`shopify::OrderClient`] fetches the record,
//! and [`action::MessageAction`] turns it into a [`action::PreparedMessage`]
//! for the presentation layer to display.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod config;
pub mod error;
pub mod shopify;

pub use action::{MessageAction, PreparedMessage};
pub use config::{ActionConfig, ConfigError};
pub use error::ActionError;
pub use shopify::{OrderClient, OrderSource};
