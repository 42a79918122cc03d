//! GraphQL client for communicating with the FinanceView service.

mod client;
mod mutations;
mod queries;

pub use client::*;
pub use mutations::*;
pub use queries::*;
