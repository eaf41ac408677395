//! Statistics reporting.

use console::style;

use crate::export::RunSummary;

/// Print statistics for a finished run.
pub fn print_run_stats(summary: &RunSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Export Statistics:").bold());
    println!("  Content types:   {}", summary.content_types);
    println!("  Pages processed: {}", summary.pages_processed);
    println!("  Exported: {}", style(summary.exported).green());
    println!("  Skipped:  {} (already exported)", summary.skipped);
    if summary.failed() > 0 {
        println!("  Failed:   {}", style(summary.failed()).red());
        for failure in &summary.failures {
            println!("    {} {}", style(&failure.link).yellow(), failure.reason);
        }
    }
    if summary.aborted {
        println!("  {}", style("Stopped early after a failed node").red());
    }
    println!("  Total:    {} nodes", summary.total_nodes());
    println!("  Elapsed:  {}s", summary.elapsed().num_seconds());
    println!("{}", style("═".repeat(50)).dim());
}
