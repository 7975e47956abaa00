use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Tabular chart input: named columns, named rows, row-major values.
///
/// Every row has one value per column and one name; deserialization goes
/// through the same check as [`ChartTableModel::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct ChartTableModel {
    column_names: Vec<String>,
    row_names: Vec<String>,
    rows: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawTable {
    column_names: Vec<String>,
    row_names: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TryFrom<RawTable> for ChartTableModel {
    type Error = ChartError;

    fn try_from(raw: RawTable) -> ChartResult<Self> {
        Self::new(raw.column_names, raw.row_names, raw.rows)
    }
}

impl ChartTableModel {
    pub fn new(
        column_names: Vec<String>,
        row_names: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> ChartResult<Self> {
        if rows.len() != row_names.len() {
            return Err(ChartError::InvalidData(format!(
                "table has {} rows but {} row names",
                rows.len(),
                row_names.len()
            )));
        }
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != column_names.len())
        {
            return Err(ChartError::InvalidData(format!(
                "row {index} has {} values, expected {}",
                row.len(),
                column_names.len()
            )));
        }
        Ok(Self {
            column_names,
            row_names,
            rows,
        })
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    #[must_use]
    pub fn row_names(&self) -> &[String] {
        &self.row_names
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|column| column == name)
    }

    #[must_use]
    pub fn row_index(&self, name: &str) -> Option<usize> {
        self.row_names.iter().position(|row| row == name)
    }

    #[must_use]
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column).copied()
    }
}

/// Series-by-category values fed to a category plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDataset {
    pub series_keys: Vec<String>,
    pub category_keys: Vec<String>,
    /// `values[series][category]`.
    pub values: Vec<Vec<f64>>,
}

impl CategoryDataset {
    /// Columns become series unless `by_row` is set, in which case rows do.
    #[must_use]
    pub fn from_table(table: &ChartTableModel, by_row: bool) -> Self {
        if by_row {
            Self {
                series_keys: table.row_names.clone(),
                category_keys: table.column_names.clone(),
                values: table.rows.clone(),
            }
        } else {
            let values = (0..table.column_count())
                .map(|column| {
                    table
                        .rows
                        .iter()
                        .filter_map(|row| row.get(column).copied())
                        .collect()
                })
                .collect();
            Self {
                series_keys: table.column_names.clone(),
                category_keys: table.row_names.clone(),
                values,
            }
        }
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series_keys.len()
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.category_keys.len()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.values.len() != self.series_keys.len() {
            return Err(ChartError::InvalidData(
                "dataset series count does not match its values".to_owned(),
            ));
        }
        for series in &self.values {
            if series.len() != self.category_keys.len() {
                return Err(ChartError::InvalidData(
                    "dataset category count does not match its values".to_owned(),
                ));
            }
            if series.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(
                    "dataset values must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
