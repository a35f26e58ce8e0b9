//! Human-readable source report.
//!
//! Explains which `<source>` stanzas an enabled set produces, in the order
//! the collector will read them.

use crate::compiler::Compiler;
use forwarding_spec::{EnabledSources, LogSourceType};

/// Generates a Markdown report of the stanzas emitted for `enabled`.
///
/// The report includes:
/// - Enabled and disabled source types
/// - One table row per emitted stanza (rank, id, tag, label, parser)
#[must_use]
pub fn generate_source_report(compiler: &Compiler, enabled: &EnabledSources) -> String {
    let mut report = String::new();

    report.push_str("# Log Source Report\n\n");

    report.push_str("## Sources\n\n");
    for source_type in LogSourceType::ALL {
        let state = if enabled.contains(source_type) {
            format!("enabled ({} stanzas)", compiler.stanza_count(source_type))
        } else {
            "disabled".to_string()
        };
        report.push_str(&format!("- **{}**: {}\n", source_type, state));
    }
    report.push('\n');

    report.push_str("## Stanzas\n\n");
    let emitted: Vec<_> = compiler
        .table()
        .iter()
        .filter(|def| enabled.contains(def.source_type))
        .collect();

    if emitted.is_empty() {
        report.push_str("No stanzas are emitted.\n");
        return report;
    }

    report.push_str("Stanzas are emitted in rank order.\n\n");
    report.push_str("| Rank | Source | Id | Tag | Label | Parser |\n");
    report.push_str("|---|---|---|---|---|---|\n");
    for def in emitted {
        let label = if def.label.is_empty() { "-" } else { def.label.as_ref() };
        report.push_str(&format!(
            "| {} | {} | `{}` | `{}` | `{}` | {} |\n",
            def.rank, def.source_type, def.id, def.tag, label, def.parser
        ));
    }

    report
}
