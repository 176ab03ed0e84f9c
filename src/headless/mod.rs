//! Headless mode - one explanation printed to stdout, no TUI
//!
//! Reads the error text from the command line or stdin, prints a
//! "Reasoning..." progress line to stderr, then writes the record either as
//! bullet lines or as a single JSON object.
//!
//! # Example Output
//!
//! ```text
//! • Error Type:    TypeError
//! • Explanation:   x is undefined
//! • Suggested Fix: check initialization
//! • More Info:
//!     • https://developer.mozilla.org/...
//! ```

use std::io::{self, Read, Write};

use stackexplain_client::{record_or_fallback, ExplainBackend};
use stackexplain_core::prelude::*;
use stackexplain_core::{ExplainRequest, ExplanationRecord};

/// Progress line written to stderr before the request is sent
pub const PROGRESS_LINE: &str = "Reasoning...";

/// Output encoding for the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Bullets,
    Json,
}

/// Error text from the positional argument, or all of stdin
pub fn read_error_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading error text from stdin")?;
            Ok(text)
        }
    }
}

/// Ask the backend once; failures become the fallback record
pub async fn explain_once<B>(backend: &B, request: &ExplainRequest) -> ExplanationRecord
where
    B: ExplainBackend + Sync,
{
    info!(
        "Headless request ({} chars, model: {})",
        request.error.chars().count(),
        request.model.as_deref().unwrap_or("<not sent>")
    );
    record_or_fallback(backend.explain(request).await)
}

/// Write `record` in the chosen format
pub fn write_record<W: Write>(
    out: &mut W,
    record: &ExplanationRecord,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, record)?;
            writeln!(out)?;
        }
        OutputFormat::Bullets => {
            let fields = [
                ("Error Type:", record.error_type.as_deref()),
                ("Explanation:", record.explanation.as_deref()),
                ("Suggested Fix:", record.suggested_fix.as_deref()),
            ];
            for (label, value) in fields {
                if let Some(value) = value {
                    writeln!(out, "• {:<15}{}", label, value)?;
                }
            }

            let links = record.relevant_links.as_deref().unwrap_or_default();
            if !links.is_empty() {
                writeln!(out, "• More Info:")?;
                for link in links {
                    writeln!(out, "    • {}", link)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Run one headless exchange against `backend`
pub async fn run<B>(backend: &B, request: ExplainRequest, format: OutputFormat) -> Result<()>
where
    B: ExplainBackend + Sync,
{
    eprintln!("{}", PROGRESS_LINE);
    let record = explain_once(backend, &request).await;
    write_record(&mut io::stdout().lock(), &record, format)
}
