pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use log::debug;
use serde_json::Value;

use crate::OutputFormat;

/// Render a calculator envelope (or catalog rows) in the requested format.
pub fn format_output(format: &OutputFormat, value: &Value) {
    debug!("rendering output as {:?}", format);
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}
