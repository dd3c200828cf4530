//! Summary rendering after a successful comparison.
//!
//! Supports `human` (default) and `json` outputs. The JSON form lists each
//! written file with its problem count plus a top-level summary.

use crate::models::Summary;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

/// One written output document.
pub struct Written<'a> {
    pub kind: &'a str,
    pub path: &'a str,
    pub problems: usize,
}

/// Print the run summary in the requested format.
pub fn print_summary(written: &[Written], summary: &Summary, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_summary_json(written, summary)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(output), e),
        },
        _ => {
            let color = crate::utils::colors_enabled(output);
            for w in written {
                if color {
                    println!(
                        "{} {} ({} {})",
                        "📝 wrote:".green().bold(),
                        w.path.bold(),
                        w.problems,
                        w.kind
                    );
                } else {
                    println!("📝 wrote: {} ({} {})", w.path, w.problems, w.kind);
                }
            }
            let line = format!(
                "Summary: first={} second={} only_in_first={} only_in_second={} in_both={}",
                summary.first,
                summary.second,
                summary.only_in_first,
                summary.only_in_second,
                summary.in_both
            );
            if color {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

/// Compose summary JSON object (pure) for testing/snapshot purposes.
pub fn compose_summary_json(written: &[Written], summary: &Summary) -> JsonVal {
    let items: Vec<_> = written
        .iter()
        .map(|w| {
            json!({
                "kind": w.kind,
                "path": w.path,
                "problems": w.problems,
            })
        })
        .collect();
    json!({
        "results": items,
        "summary": serde_json::to_value(summary).unwrap_or(JsonVal::Null),
    })
}
