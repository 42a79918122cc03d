//! Draft state for a not-yet-submitted expense.

use chrono::Local;

use crate::error::ValidationError;
use crate::types::MutationVariables;

/// Draft date format: two-digit month (1-12), two-digit day, four-digit year.
const DATE_FORMAT: &str = "%m-%d-%Y";

/// Field selector for [`ExpenseDraft::with_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Description,
    Amount,
    Category,
    Comment,
}

/// User-entered text for a new expense.
///
/// A plain value with pure transitions: the renderer owns the current draft
/// and replaces it wholesale on each edit via [`with_field`]. `amount` stays
/// raw user text until [`to_mutation_variables`] parses it. After a
/// successful submission the caller starts over with [`ExpenseDraft::new`];
/// the draft never resets itself.
///
/// [`with_field`]: ExpenseDraft::with_field
/// [`to_mutation_variables`]: ExpenseDraft::to_mutation_variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub comment: String,
}

impl ExpenseDraft {
    /// A fresh draft: all fields empty except `date`, which defaults to
    /// today's local calendar date as `MM-DD-YYYY`.
    pub fn new() -> Self {
        Self {
            date: Local::now().format(DATE_FORMAT).to_string(),
            description: String::new(),
            amount: String::new(),
            category: String::new(),
            comment: String::new(),
        }
    }

    /// Produce a new draft with one field replaced. No side effects.
    pub fn with_field(mut self, field: DraftField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            DraftField::Date => self.date = value,
            DraftField::Description => self.description = value,
            DraftField::Amount => self.amount = value,
            DraftField::Category => self.category = value,
            DraftField::Comment => self.comment = value,
        }
        self
    }

    /// Validate the draft and package it as mutation variables.
    ///
    /// `amount` must parse as a float; everything else passes through
    /// unchanged, with no required-field enforcement. The category is
    /// wrapped as a single-element list: the form collects exactly one tag
    /// per expense on creation, even though the wire schema accepts a list.
    pub fn to_mutation_variables(&self) -> Result<MutationVariables, ValidationError> {
        let amt: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::field("amount"))?;

        Ok(MutationVariables {
            date: self.date.clone(),
            desc: self.description.clone(),
            amt,
            cats: vec![self.category.clone()],
            cmt: self.comment.clone(),
        })
    }
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self::new()
    }
}
