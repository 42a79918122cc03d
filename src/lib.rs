//! Pure GraphQL client for the FinanceView expense tracker.
//!
//! Fetches expense records (with nested category tags) from the FinanceView
//! GraphQL service, flattens them into a tabular view model for display, and
//! submits newly entered expenses back through a mutation. Rendering is the
//! caller's job; this crate only shapes data.
//!
//! # Example
//!
//! ```rust,ignore
//! use financeview_client::{normalize, DraftField, ExpenseDraft, QueryClient};
//!
//! let client = QueryClient::new("http://localhost:8080/query");
//!
//! // Read path: fetch, then flatten for the table.
//! let expenses = client.fetch_expenses().await?;
//! let table = normalize(&expenses);
//!
//! // Write path: collect input, validate, submit.
//! let draft = ExpenseDraft::new()
//!     .with_field(DraftField::Description, "Coffee")
//!     .with_field(DraftField::Amount, "4.50")
//!     .with_field(DraftField::Category, "Food");
//! let created = client.submit_expense(&draft.to_mutation_variables()?).await?;
//! ```

pub mod draft;
pub mod error;
pub mod graphql;
pub mod table;
pub mod types;

pub use draft::{DraftField, ExpenseDraft};
pub use error::{ClientError, Result, ValidationError};
pub use graphql::{QueryClient, CREATE_EXPENSE, LIST_EXPENSES};
pub use table::{normalize, TableViewModel, COLUMNS};
pub use types::{Category, Expense, MutationVariables};
