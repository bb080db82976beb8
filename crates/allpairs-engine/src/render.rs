//! Case rendering.
//!
//! Turns a committed [`TestCase`] into display cells in the original column
//! order of the table. Outside range mode, parameters flagged as needed are
//! prefixed with [`NEEDED_MARKER`]. In range mode, values written in range
//! syntax are replaced by a sample drawn from the injected RNG.

use allpairs_table::ParameterTable;
use rand::Rng;

use crate::range::{is_range_syntax, sample_value, RangeError};
use crate::solver::TestCase;

/// Prefix for parameters whose value still has under-covered pairings.
pub const NEEDED_MARKER: char = '~';

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("parameter '{parameter}': {source}")]
    Range {
        parameter: String,
        #[source]
        source: RangeError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Sample range-syntax values instead of printing them.
    pub range_sampling: bool,
    /// Emit [`NEEDED_MARKER`]; ignored in range mode.
    pub mark_needed: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            range_sampling: false,
            mark_needed: true,
        }
    }
}

/// A case ready for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCase {
    /// Display cells in original column order.
    pub cells: Vec<String>,
    /// Raw value strings in original column order, for handing to an
    /// external program. Never marked or sampled.
    pub args: Vec<String>,
}

impl RenderedCase {
    /// Tab-separated display row.
    pub fn row(&self) -> String {
        self.cells.join("\t")
    }

    /// Raw values, each double-quoted, space-separated.
    pub fn quoted_args(&self) -> String {
        self.args
            .iter()
            .map(|a| format!("\"{a}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct CaseRenderer<'a, R> {
    table: &'a ParameterTable,
    options: RenderOptions,
    rng: R,
}

impl<'a, R: Rng> CaseRenderer<'a, R> {
    pub fn new(table: &'a ParameterTable, options: RenderOptions, rng: R) -> Self {
        Self {
            table,
            options,
            rng,
        }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn render(&mut self, case: &TestCase) -> Result<RenderedCase, RenderError> {
        let mut cells = Vec::with_capacity(case.len());
        let mut args = Vec::with_capacity(case.len());

        for &position in self.table.original_order() {
            let raw = case.values[position]
                .and_then(|index| self.table.value(position, index))
                .unwrap_or("");

            let mut cell = String::new();
            if !self.options.range_sampling && self.options.mark_needed && case.needed[position] {
                cell.push(NEEDED_MARKER);
            }

            if self.options.range_sampling && is_range_syntax(raw) {
                let sample =
                    sample_value(raw, &mut self.rng).map_err(|source| RenderError::Range {
                        parameter: self.table.label(position).to_string(),
                        source,
                    })?;
                cell.push_str(&sample.to_string());
            } else {
                cell.push_str(raw);
            }

            cells.push(cell);
            args.push(raw.to_string());
        }

        Ok(RenderedCase { cells, args })
    }
}
