//! Parameter domain model.
//!
//! A [`ParameterTable`] holds one labeled [`Parameter`] per input column.
//! Downstream code addresses parameters only by their *position*: the
//! index after sorting by domain size, largest first. Columns with equal
//! domain sizes keep their input order, so positions are deterministic.
//! The original column order is retained for rendering.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::parse::TableError;

/// One labeled column of the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Column label, unique within a table.
    pub name: String,
    /// Ordered domain values, in row order of the source table.
    pub values: Vec<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn domain_size(&self) -> usize {
        self.values.len()
    }
}

/// Parameters sorted by descending domain size, plus the mapping back to
/// the order the columns appeared in.
///
/// Serialized as the list of columns in their original order; deserializing
/// goes through [`ParameterTable::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Parameter>", into = "Vec<Parameter>")]
pub struct ParameterTable {
    /// Parameters in position order (largest domain first).
    parameters: Vec<Parameter>,
    /// `positions[column]` is the sorted position of original column `column`.
    positions: Vec<usize>,
}

impl ParameterTable {
    /// Build a table from columns in their original order.
    ///
    /// Rejects blank and duplicate labels.
    pub fn new(columns: Vec<Parameter>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if column.name.is_empty() {
                return Err(TableError::BlankLabel);
            }
            if !seen.insert(column.name.as_str()) {
                return Err(TableError::DuplicateLabel {
                    label: column.name.clone(),
                });
            }
        }

        let mut indexed: Vec<(usize, Parameter)> = columns.into_iter().enumerate().collect();
        // Stable: equal-size domains keep input column order.
        indexed.sort_by(|a, b| b.1.domain_size().cmp(&a.1.domain_size()));

        let mut positions = vec![0; indexed.len()];
        let mut parameters = Vec::with_capacity(indexed.len());
        for (position, (column, parameter)) in indexed.into_iter().enumerate() {
            positions[column] = position;
            parameters.push(parameter);
        }

        Ok(Self {
            parameters,
            positions,
        })
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameters in position order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// The parameter at a sorted position.
    pub fn parameter(&self, position: usize) -> Option<&Parameter> {
        self.parameters.get(position)
    }

    /// Label of the parameter at a sorted position.
    pub fn label(&self, position: usize) -> &str {
        &self.parameters[position].name
    }

    /// Value string `index` of the parameter at `position`.
    pub fn value(&self, position: usize, index: usize) -> Option<&str> {
        self.parameters
            .get(position)
            .and_then(|p| p.values.get(index))
            .map(String::as_str)
    }

    /// Domain sizes in position order.
    pub fn domain_sizes(&self) -> Vec<usize> {
        self.parameters.iter().map(Parameter::domain_size).collect()
    }

    /// Sorted position of an original column.
    pub fn position_of_column(&self, column: usize) -> usize {
        self.positions[column]
    }

    /// Sorted positions listed in original column order.
    pub fn original_order(&self) -> &[usize] {
        &self.positions
    }

    /// Labels in original column order.
    pub fn labels_in_original_order(&self) -> Vec<&str> {
        self.positions.iter().map(|&p| self.label(p)).collect()
    }

    /// Sorted position of the parameter with the given label.
    pub fn position_of_label(&self, label: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.name == label)
    }
}

impl TryFrom<Vec<Parameter>> for ParameterTable {
    type Error = TableError;

    fn try_from(columns: Vec<Parameter>) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

impl From<ParameterTable> for Vec<Parameter> {
    fn from(table: ParameterTable) -> Self {
        let ParameterTable {
            parameters,
            positions,
        } = table;
        let mut slots: Vec<Option<Parameter>> = parameters.into_iter().map(Some).collect();
        positions
            .iter()
            .filter_map(|&position| slots.get_mut(position).and_then(Option::take))
            .collect()
    }
}
