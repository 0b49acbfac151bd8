//! Placeholder AI text functions consumed by editing surfaces.
//!
//! These are stubs with a fixed latency and deterministic output, standing
//! in for a real inference pipeline. The core treats their output as opaque
//! text to merge into a report via the store's update operation.

use std::time::Duration;

/// Simulated inference latency.
pub const AI_LATENCY: Duration = Duration::from_millis(1500);

/// How much of the source text a summary quotes.
const SUMMARY_HEAD: usize = 100;

/// Produces draft text for the given prompt.
pub async fn generate(prompt: &str) -> String {
    tokio::time::sleep(AI_LATENCY).await;
    format!("Generated content based on: {}", prompt)
}

/// Produces a short summary of the given text.
pub async fn summarize(text: &str) -> String {
    tokio::time::sleep(AI_LATENCY).await;
    let head: String = text.chars().take(SUMMARY_HEAD).collect();
    format!("Summary: {}...", head)
}

/// Appends generated text to existing content, separated by a blank line.
pub fn append_generated(content: &str, generated: &str) -> String {
    if content.is_empty() {
        generated.to_string()
    } else {
        format!("{}\n\n{}", content, generated)
    }
}

/// Prepends a summary block above the existing content.
pub fn prepend_summary(content: &str, summary: &str) -> String {
    format!("## Summary\n{}\n\n---\n\n{}", summary, content)
}
