//! GraphQL query definitions.

pub const LIST_EXPENSES: &str = r#"
  query ListExpenses {
    expenses {
      Id
      Date
      Amount
      Description
      Categories {
        Id
        Name
      }
      Comment
    }
  }
"#;
