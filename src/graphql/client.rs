//! GraphQL client for making requests to the FinanceView service.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::graphql::{CREATE_EXPENSE, LIST_EXPENSES};
use crate::types::{Expense, MutationVariables};

const DEFAULT_ENDPOINT: &str = "http://localhost:8080/query";

/// GraphQL request body.
#[derive(Debug, Serialize)]
struct GraphQLRequest<V: Serialize> {
    query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<V>,
}

/// GraphQL response envelope. `data` is decoded in a second step so that a
/// top-level `errors` array can be reported before any shape checking.
#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQLErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ExpensesData {
    expenses: Vec<Expense>,
}

#[derive(Debug, Deserialize)]
struct CreateExpenseData {
    #[serde(rename = "createExpense")]
    create_expense: Expense,
}

/// Client for the FinanceView GraphQL endpoint.
///
/// Each operation performs exactly one network call: no retry, no caching,
/// no deduplication of concurrent identical calls. Every call builds its own
/// request and owns its own response, so concurrent invocations may complete
/// in either order.
#[derive(Debug, Clone)]
pub struct QueryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl QueryClient {
    /// Create a new client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client from the `FINANCEVIEW_API_URL` environment variable,
    /// falling back to `http://localhost:8080/query`.
    pub fn from_env() -> Self {
        let url =
            std::env::var("FINANCEVIEW_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(url)
    }

    /// Fetch all expenses.
    ///
    /// Returns the list exactly as the service sent it; ordering is whatever
    /// the service produced, the client imposes none.
    pub async fn fetch_expenses(&self) -> Result<Vec<Expense>> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching expenses");
        let data: ExpensesData = self.execute::<(), _>(LIST_EXPENSES, None).await?;
        tracing::info!(count = data.expenses.len(), "Fetched expenses");
        Ok(data.expenses)
    }

    /// Submit a new expense and return the created record.
    ///
    /// The mutation requests the full field set back, so the caller can
    /// append the result to its view model without a refetch.
    pub async fn submit_expense(&self, vars: &MutationVariables) -> Result<Expense> {
        tracing::debug!(endpoint = %self.endpoint, desc = %vars.desc, "Submitting expense");
        let data: CreateExpenseData = self.execute(CREATE_EXPENSE, Some(vars)).await?;
        tracing::info!(id = %data.create_expense.id, "Expense created");
        Ok(data.create_expense)
    }

    /// Execute a GraphQL document and decode the `data` payload into `T`.
    async fn execute<V, T>(&self, query: &'static str, variables: Option<V>) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let request = GraphQLRequest { query, variables };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;
        let body = response.text().await?;

        decode(&body)
    }
}

/// Decode a GraphQL response body.
///
/// A non-empty `errors` array wins over any `data` present, so a partial
/// result is never handed to the caller. Shape failures (non-JSON body,
/// missing `data`, mistyped fields) become [`ClientError::Shape`].
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let response: GraphQLResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Shape(e.to_string()))?;

    if let Some(errors) = response.errors {
        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            tracing::warn!(count = messages.len(), "GraphQL request returned errors");
            return Err(ClientError::GraphQL(messages));
        }
    }

    let data = response
        .data
        .ok_or_else(|| ClientError::Shape("response contained no data".to_string()))?;
    serde_json::from_value(data).map_err(|e| ClientError::Shape(e.to_string()))
}
