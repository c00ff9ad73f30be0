//! Rendering calculator state for the terminal

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;
use serde::Serialize;
use tapcalc::core::{NumberFormat, Variables, OPERATIONS};
use tapcalc::keypad::KeypadSession;
use tapcalc::plot::PlotPoint;

/// What the display shows after a batch of keys
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateReport {
    /// Main display text
    pub display: String,
    /// Raw result, if any
    pub result: Option<f64>,
    /// Whether a binary operation is pending
    pub is_pending: bool,
    /// Description line
    pub description: String,
    /// Bindings in effect
    pub variables: Variables,
}

impl StateReport {
    /// Captures the session's current state
    #[must_use]
    pub fn capture(session: &KeypadSession) -> Self {
        let evaluation = session.evaluation();
        Self {
            display: session.display().to_string(),
            result: evaluation.result,
            is_pending: evaluation.is_pending,
            description: session.description().to_string(),
            variables: session.variables().clone(),
        }
    }
}

#[derive(Serialize)]
struct OperationRow {
    symbol: &'static str,
    kind: &'static str,
}

/// Renders a session state
pub fn render_state(report: &StateReport, config: &CliConfig) -> CliResult<String> {
    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Text => {
            let marker = if report.is_pending { " (pending)" } else { "" };
            Ok(format!("{}{marker}\n{}", report.display, report.description))
        }
    }
}

/// Renders sampled points; missing values show as `-`
pub fn render_points(points: &[PlotPoint], config: &CliConfig) -> CliResult<String> {
    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string(points)?),
        OutputFormat::Text => {
            let format: NumberFormat = config.number_format();
            Ok(points
                .iter()
                .map(|p| {
                    let y = p.y.map_or_else(|| "-".to_string(), |y| format.format(y));
                    format!("{}\t{y}", format.format(p.x))
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

/// Renders the operation table
pub fn render_operations(config: &CliConfig) -> CliResult<String> {
    let rows: Vec<OperationRow> = OPERATIONS
        .iter()
        .map(|(symbol, op)| OperationRow {
            symbol: *symbol,
            kind: op.kind(),
        })
        .collect();
    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string(&rows)?),
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| format!("{}\t{}", row.symbol, row.kind))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
