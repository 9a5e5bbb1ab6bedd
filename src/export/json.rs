//! JSON export
//!
//! Pretty-printed serialization of the report payload, verbatim. This is
//! also the guaranteed-available format the PDF path downgrades to.

use crate::error::{BoardError, BoardResult};
use crate::models::Report;

/// Render a report as pretty-printed JSON
pub fn render(report: &Report) -> BoardResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| BoardError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures::{custom_report, trend_report};

    #[test]
    fn test_json_round_trips() {
        let report = custom_report();
        let text = render(&report).unwrap();

        let parsed: Report = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.title(), report.title());
        match parsed {
            Report::Custom(r) => assert_eq!(r.entries.len(), 3),
            Report::Trend(_) => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let text = render(&trend_report()).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("\"report_type\": \"trend\""));
    }
}
