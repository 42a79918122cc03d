//! Type definitions for the FinanceView GraphQL API.
//!
//! Field names are PascalCase on the wire (`Id`, `Date`, ...), matching the
//! service schema.

use serde::{Deserialize, Serialize};

/// A category tag attached to an expense. Server-assigned, immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A single expense record as returned by the service.
///
/// Created through the `createExpense` mutation and never mutated
/// client-side; the client only re-fetches. `Comment` may be absent on the
/// wire and defaults to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expense {
    pub id: String,
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub comment: String,
}

/// Variables for the `createExpense` mutation.
///
/// Serialized field names match the mutation's variable declarations
/// (`$date`, `$desc`, `$amt`, `$cats`, `$cmt`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationVariables {
    pub date: String,
    pub desc: String,
    pub amt: f64,
    pub cats: Vec<String>,
    pub cmt: String,
}
