//! Rendering of search results to text, CSV, and JSON.
//!
//! Pure formatting over a finished `SearchResult`; nothing here feeds back
//! into the search.

use thiserror::Error;

use crate::solver::SearchResult;
use crate::utils::digits_to_string;

/// Output format for a rendered result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render a result in the requested format
///
/// # Errors
///
/// Only JSON serialization can fail; text and CSV rendering are infallible.
pub fn render(result: &SearchResult, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Text => Ok(to_text(result)),
        ExportFormat::Csv => Ok(to_csv(result)),
        ExportFormat::Json => Ok(to_json(result)?),
    }
}

/// Plain-text listing with a small header, one numbered equation per line
pub fn to_text(result: &SearchResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Equations for digits {}\n",
        digits_to_string(&result.digits)
    ));
    out.push_str(&format!("Total unique equations: {}\n\n", result.len()));

    for (i, eq) in result.equations.iter().enumerate() {
        out.push_str(&format!(
            "{:4}. {} = {}  (= {})\n",
            i + 1,
            eq.left,
            eq.right,
            eq.value
        ));
    }
    out
}

/// CSV with a header row; fields are quoted where needed since expression
/// texts can contain commas (`root(27, 3)`)
pub fn to_csv(result: &SearchResult) -> String {
    let mut out = String::from("number,left,right,value\n");
    for (i, eq) in result.equations.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{}\n",
            i + 1,
            csv_field(&eq.left),
            csv_field(&eq.right),
            eq.value
        ));
    }
    out
}

/// Pretty-printed JSON of the whole result
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn to_json(result: &SearchResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Equation, SearchResult};

    fn sample() -> SearchResult {
        SearchResult {
            digits: vec![1, 2, 3],
            equations: vec![
                Equation {
                    left: "1 + 2".to_string(),
                    right: "3".to_string(),
                    value: 3.0,
                },
                Equation {
                    left: "root(12, 3)".to_string(),
                    right: "root(12, 3)".to_string(),
                    value: 2.289_428_485_106_664,
                },
            ],
        }
    }

    #[test]
    fn test_text_rendering() {
        let text = to_text(&sample());
        assert!(text.starts_with("Equations for digits 123\n"));
        assert!(text.contains("1 + 2 = 3  (= 3)"));
        assert!(text.contains("Total unique equations: 2"));
    }

    #[test]
    fn test_csv_quotes_commas() {
        let csv = to_csv(&sample());
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("number,left,right,value"));
        assert_eq!(lines.next(), Some("1,1 + 2,3,3"));
        let second = lines.next().unwrap_or_default();
        assert!(second.starts_with("2,\"root(12, 3)\",\"root(12, 3)\","));
    }

    #[test]
    fn test_csv_escapes_quotes() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_json_round_trips_fields() {
        let json = to_json(&sample()).unwrap_or_default();
        assert!(json.contains("\"digits\""));
        assert!(json.contains("\"left\": \"1 + 2\""));
        assert!(json.contains("\"value\": 3.0"));
    }

    #[test]
    fn test_render_dispatch() {
        let result = sample();
        assert!(render(&result, ExportFormat::Text).is_ok());
        assert!(render(&result, ExportFormat::Csv).is_ok());
        assert!(render(&result, ExportFormat::Json).is_ok());
    }
}
