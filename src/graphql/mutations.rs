//! GraphQL mutation definitions.

pub const CREATE_EXPENSE: &str = r#"
  mutation NewExpense($date: String!, $desc: String!, $amt: Float!, $cats: [String!]!, $cmt: String) {
    createExpense(input: {
      date: $date,
      description: $desc,
      amount: $amt,
      categories: $cats,
      comment: $cmt
    }) {
      Id
      Date
      Description
      Amount
      Categories {
        Id
        Name
      }
      Comment
    }
  }
"#;
