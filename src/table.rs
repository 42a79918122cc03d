//! Normalization of nested expense records into a flat table view model.

use crate::types::Expense;

/// Fixed column schema for the expense table.
///
/// Declared explicitly rather than derived from record field order, so the
/// display layout never depends on how a particular service implementation
/// happens to enumerate fields.
pub const COLUMNS: [&str; 6] = ["Id", "Date", "Amount", "Description", "Categories", "Comment"];

/// Flat column/row structure handed to a display layer.
///
/// Recomputed in full on every fetch, never patched in place. Every row has
/// exactly `columns.len()` entries, each already rendered as display text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableViewModel {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Flatten expense records into a [`TableViewModel`].
///
/// Row order matches input order; no sorting, no filtering. An empty input
/// yields an empty view model with no columns.
pub fn normalize(expenses: &[Expense]) -> TableViewModel {
    if expenses.is_empty() {
        return TableViewModel::default();
    }

    let rows = expenses
        .iter()
        .map(|expense| {
            vec![
                expense.id.clone(),
                expense.date.clone(),
                expense.amount.to_string(),
                expense.description.clone(),
                join_category_names(expense),
                expense.comment.clone(),
            ]
        })
        .collect();

    TableViewModel {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    }
}

/// Category names joined in list order. Order is preserved and duplicates
/// are kept; the tags round-trip exactly as the service sent them.
fn join_category_names(expense: &Expense) -> String {
    expense
        .categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn expense(id: &str, categories: Vec<Category>) -> Expense {
        Expense {
            id: id.to_string(),
            date: "01-15-2024".to_string(),
            description: "Coffee".to_string(),
            amount: 4.5,
            categories,
            comment: String::new(),
        }
    }

    fn category(name: &str) -> Category {
        Category {
            id: format!("cat-{name}"),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_normalize_empty_input() {
        let model = normalize(&[]);
        assert!(model.columns.is_empty());
        assert!(model.rows.is_empty());
    }

    #[test]
    fn test_columns_are_fixed_schema() {
        let model = normalize(&[expense("1", vec![])]);
        assert_eq!(
            model.columns,
            vec!["Id", "Date", "Amount", "Description", "Categories", "Comment"]
        );
    }

    #[test]
    fn test_categories_joined_in_order() {
        let model = normalize(&[expense("1", vec![category("Food"), category("Gas")])]);
        assert_eq!(model.rows[0][4], "Food, Gas");
    }

    #[test]
    fn test_categories_not_deduplicated_or_reordered() {
        let model = normalize(&[expense(
            "1",
            vec![category("Gas"), category("Food"), category("Gas")],
        )]);
        assert_eq!(model.rows[0][4], "Gas, Food, Gas");
    }

    #[test]
    fn test_zero_categories_render_empty() {
        let model = normalize(&[expense("1", vec![])]);
        assert_eq!(model.rows[0][4], "");
    }

    #[test]
    fn test_amount_rendered_without_currency_symbol() {
        let mut exp = expense("1", vec![]);
        exp.amount = 12.5;
        let model = normalize(&[exp]);
        assert_eq!(model.rows[0][2], "12.5");
    }

    #[test]
    fn test_every_row_has_one_cell_per_column() {
        let model = normalize(&[
            expense("1", vec![category("Food")]),
            expense("2", vec![]),
            expense("3", vec![category("Gas"), category("Travel")]),
        ]);
        for row in &model.rows {
            assert_eq!(row.len(), model.columns.len());
        }
    }

    #[test]
    fn test_row_order_matches_input_order() {
        let model = normalize(&[expense("b", vec![]), expense("a", vec![])]);
        assert_eq!(model.rows[0][0], "b");
        assert_eq!(model.rows[1][0], "a");
    }
}
