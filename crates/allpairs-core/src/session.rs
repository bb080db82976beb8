//! Generation sessions.
//!
//! A [`GenerationSession`] owns one parameter table, its coverage matrix
//! and the committed cases. It is built by running the generation loop to
//! completion and is read-only afterwards; every table gets a fresh
//! session.

use std::path::Path;

use rand::Rng;
use tracing::{debug, info, warn};

use allpairs_engine::render::RenderError;
use allpairs_engine::solver::rng::table_rng;
use allpairs_engine::{find_next, CaseRenderer, PairCoverageMatrix, RenderedCase, TestCase};
use allpairs_table::{load_table, parse_table, ParameterTable, TableError};

use crate::config::GenerationConfig;
use crate::report;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("table error: {0}")]
    Table(#[from] TableError),

    #[error("case {case}: {source}")]
    Render {
        case: usize,
        #[source]
        source: RenderError,
    },

    #[error("case limit of {limit} reached with {uncovered} pairs still uncovered")]
    CaseLimitExceeded { limit: u64, uncovered: usize },
}

/// One committed case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    /// 1-based case number.
    pub number: usize,
    pub case: TestCase,
    /// Pairs this case covered for the first time.
    pub score: usize,
    pub rendered: RenderedCase,
}

impl CaseRecord {
    /// Output row: case number followed by the rendered cells.
    pub fn row(&self) -> String {
        let mut row = self.number.to_string();
        for cell in &self.rendered.cells {
            row.push('\t');
            row.push_str(cell);
        }
        row.trim_end().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct GenerationSession {
    table: ParameterTable,
    matrix: PairCoverageMatrix,
    cases: Vec<CaseRecord>,
}

impl GenerationSession {
    /// Generate cases for `table` until every pair is covered.
    ///
    /// `rng` feeds range sampling only; without range mode the result is
    /// the same for any source.
    pub fn generate<R: Rng>(
        table: ParameterTable,
        config: &GenerationConfig,
        rng: R,
    ) -> Result<Self, SessionError> {
        let domains = table.domain_sizes();
        for (position, &size) in domains.iter().enumerate() {
            if size == 0 {
                warn!(parameter = table.label(position), "parameter has no values");
            }
        }

        let mut matrix = PairCoverageMatrix::new(&domains);
        info!(
            parameters = table.len(),
            cells = matrix.cell_total(),
            "starting generation"
        );

        let mut cases: Vec<CaseRecord> = Vec::new();
        let mut renderer = CaseRenderer::new(&table, config.render_options(), rng);

        while matrix.has_uncovered() {
            if let Some(limit) = config.max_cases {
                if cases.len() as u64 >= limit {
                    return Err(SessionError::CaseLimitExceeded {
                        limit,
                        uncovered: matrix.uncovered(),
                    });
                }
            }

            let number = cases.len() + 1;
            let case = find_next(&matrix);
            let rendered = renderer
                .render(&case)
                .map_err(|source| SessionError::Render {
                    case: number,
                    source,
                })?;
            let score = matrix.score(&case);
            let newly_covered = matrix.record(&case, number);
            debug_assert_eq!(score, newly_covered);
            debug!(case = number, score, "committed case");

            cases.push(CaseRecord {
                number,
                case,
                score,
                rendered,
            });
        }
        drop(renderer);

        info!(cases = cases.len(), "generation complete");
        Ok(Self {
            table,
            matrix,
            cases,
        })
    }

    /// Generate with the seeded RNG for table number `table_index` of a run.
    pub fn run(
        table: ParameterTable,
        config: &GenerationConfig,
        table_index: u64,
    ) -> Result<Self, SessionError> {
        Self::generate(table, config, table_rng(config.seed, table_index))
    }

    /// Parse table text and generate.
    pub fn from_text(text: &str, config: &GenerationConfig) -> Result<Self, SessionError> {
        Self::run(parse_table(text)?, config, 0)
    }

    /// Load a table file and generate.
    pub fn from_path(
        path: &Path,
        config: &GenerationConfig,
        table_index: u64,
    ) -> Result<Self, SessionError> {
        Self::run(load_table(path)?, config, table_index)
    }

    pub fn table(&self) -> &ParameterTable {
        &self.table
    }

    pub fn matrix(&self) -> &PairCoverageMatrix {
        &self.matrix
    }

    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    /// Header plus one row per case.
    pub fn output_text(&self) -> String {
        report::output_text(self)
    }

    /// Quoted raw values per case, for an external program.
    pub fn invocation_args(&self) -> Vec<String> {
        self.cases
            .iter()
            .map(|record| record.rendered.quoted_args())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_trims_trailing_blank_cells() {
        let record = CaseRecord {
            number: 3,
            case: TestCase::unassigned(2),
            score: 0,
            rendered: RenderedCase {
                cells: vec!["a1".into(), String::new()],
                args: vec!["a1".into(), String::new()],
            },
        };
        assert_eq!(record.row(), "3\ta1");
    }

    #[test]
    fn test_empty_text_generates_nothing() {
        let session = GenerationSession::from_text("", &GenerationConfig::default()).unwrap();
        assert!(session.cases().is_empty());
        assert!(!session.matrix().has_uncovered());
    }

    #[test]
    fn test_case_limit() {
        let config = GenerationConfig {
            max_cases: Some(2),
            ..GenerationConfig::default()
        };
        let err = GenerationSession::from_text("A\tB\na1\tb1\na2\tb2\n", &config).unwrap_err();
        assert!(matches!(
            err,
            SessionError::CaseLimitExceeded { limit: 2, uncovered: 2 }
        ));
    }
}
