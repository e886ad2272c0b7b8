use std::sync::Arc;

use crate::types::RowValues;

/// A single row from a query result, with access to both the column names
/// and the values.
#[derive(Debug, Clone)]
pub struct Row {
    /// The column names for this row
    pub column_names: Arc<Vec<String>>,
    /// The values for this row, in column order
    pub values: Vec<RowValues>,
}

impl Row {
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, values: Vec<RowValues>) -> Self {
        Self {
            column_names,
            values,
        }
    }

    /// Get the index of a column by name
    #[must_use]
    pub fn get_column_index(&self, column_name: &str) -> Option<usize> {
        self.column_names.iter().position(|col| col == column_name)
    }

    /// Get a value from the row by column name, or None if the column
    /// wasn't found
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        self.get_column_index(column_name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get a value from the row by column index, or None if the index is
    /// out of bounds
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        self.values.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row::new(
            Arc::new(vec!["id".to_string(), "title".to_string()]),
            vec![RowValues::Int(7), RowValues::Text("write tests".to_string())],
        )
    }

    #[test]
    fn lookup_by_name_and_index_agree() {
        let row = sample_row();
        assert_eq!(row.get("id"), row.get_by_index(0));
        assert_eq!(row.get("title").unwrap().as_text(), Some("write tests"));
    }

    #[test]
    fn unknown_column_is_none() {
        let row = sample_row();
        assert!(row.get("missing").is_none());
        assert!(row.get_by_index(5).is_none());
    }
}
