//! Numeric-engine injection.
//!
//! Generated output text can be pushed into an external numeric computing
//! session as one labeled vector per column. The engine is a capability
//! handed in by the caller; generation never depends on one being
//! available.

use std::path::Path;

use tracing::{debug, info};

use allpairs_engine::render::NEEDED_MARKER;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("no numeric engine available")]
    Unavailable,

    #[error("malformed output text: {0}")]
    Malformed(String),

    #[error("column '{label}' has non-numeric value {value:?}")]
    NonNumeric { label: String, value: String },

    #[error("engine error: {0}")]
    Engine(String),
}

/// An external session that accepts named numeric vectors and commands.
pub trait NumericEngine {
    /// Bind `values` to the variable `name`, replacing any previous binding.
    fn put_variable(&mut self, name: &str, values: &[f64]) -> Result<(), BridgeError>;

    /// Evaluate a command string in the engine.
    fn eval_string(&mut self, command: &str) -> Result<(), BridgeError>;
}

/// Parse output text into labeled numeric columns, in column order.
///
/// Needed markers are stripped and blank cells skipped.
pub fn parse_injection(output_text: &str) -> Result<Vec<(String, Vec<f64>)>, BridgeError> {
    let mut lines = output_text.lines();
    let Some(header) = lines.next() else {
        return Ok(Vec::new());
    };
    if !header.contains('\t') {
        return Err(BridgeError::Malformed(
            "the label row must be tab-delimited".to_string(),
        ));
    }
    if header.split('\t').any(str::is_empty) {
        return Err(BridgeError::Malformed(
            "missing column label or extraneous tab in the label row".to_string(),
        ));
    }

    let mut columns: Vec<(String, Vec<f64>)> = header
        .split('\t')
        .map(|label| (label.to_string(), Vec::new()))
        .collect();

    for line in lines {
        let cleaned = line.replace(NEEDED_MARKER, "");
        for ((label, values), cell) in columns.iter_mut().zip(cleaned.split('\t')) {
            if cell.is_empty() {
                continue;
            }
            let value = cell.parse::<f64>().map_err(|_| BridgeError::NonNumeric {
                label: label.clone(),
                value: cell.to_string(),
            })?;
            values.push(value);
        }
    }

    Ok(columns)
}

/// Push every column of `output_text` into `engine`.
///
/// Returns the number of variables written.
pub fn inject<E: NumericEngine + ?Sized>(
    engine: &mut E,
    output_text: &str,
) -> Result<usize, BridgeError> {
    let columns = parse_injection(output_text)?;
    for (label, values) in &columns {
        debug!(variable = %label, len = values.len(), "injecting column");
        engine.put_variable(label, values)?;
    }
    info!(variables = columns.len(), "injected output into numeric engine");
    Ok(columns.len())
}

/// Inject, then optionally run `script` from `working_dir` in the engine.
pub fn inject_and_run(
    engine: Option<&mut dyn NumericEngine>,
    output_text: &str,
    working_dir: &Path,
    script: Option<&Path>,
) -> Result<usize, BridgeError> {
    let engine = engine.ok_or(BridgeError::Unavailable)?;
    let written = inject(&mut *engine, output_text)?;
    if let Some(script) = script {
        engine.eval_string(&format!("cd '{}'", working_dir.display()))?;
        engine.eval_string(&format!("run '{}'", script.display()))?;
    }
    Ok(written)
}
