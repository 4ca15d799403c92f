//! Split Gateway - translates expense-splitting intents into Splitwise API calls
//!
//! The only local computation is the share allocator in the `core` module, which turns
//! a total, a payer and a split strategy into per-participant paid/owed
//! amounts. Everything else forwards one request to the downstream API and
//! wraps the reply in a `{status, data}` envelope.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{allocate, AllocationError, SplitStrategy};
pub use error::GatewayError;
pub use models::{Allocation, ExpenseIntent, GatewayResponse, ParticipantShare};
pub use services::{Gateway, SplitwiseClient};
