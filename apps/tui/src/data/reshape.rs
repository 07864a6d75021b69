use crate::data::{DataError, DataTable};
use serde::Serialize;

/// One `(id, variable, value)` row of a long-form table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRow<T> {
    pub id: String,
    pub variable: String,
    pub value: T,
}

/// Wide-to-long reshape of an id column plus numeric value columns.
///
/// Output is variable-major: every id for the first column, then every id for
/// the second, and so on. `len = table.len() * value_columns.len()`.
pub fn melt(
    table: &DataTable,
    id_column: &str,
    value_columns: &[&str],
) -> Result<Vec<LongRow<f64>>, DataError> {
    let ids: Vec<String> = table
        .column(id_column)?
        .into_iter()
        .map(str::to_string)
        .collect();

    let columns = value_columns
        .iter()
        .map(|column| table.numeric_column(column))
        .collect::<Result<Vec<_>, _>>()?;

    let rows: Vec<Vec<f64>> = (0..ids.len())
        .map(|row| columns.iter().map(|values| values[row]).collect())
        .collect();

    Ok(melt_rows(&ids, value_columns, &rows))
}

/// Same reshape over an already materialised matrix (`values[row][column]`).
pub fn melt_rows<T: Clone>(ids: &[String], variables: &[&str], values: &[Vec<T>]) -> Vec<LongRow<T>> {
    variables
        .iter()
        .enumerate()
        .flat_map(|(column, variable)| {
            ids.iter().zip(values).map(move |(id, row)| LongRow {
                id: id.clone(),
                variable: (*variable).to_string(),
                value: row[column].clone(),
            })
        })
        .collect()
}
