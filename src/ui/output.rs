use std::path::Path;

use fabexport::application::{CheckReport, CheckStatus};
use fabexport::domain::layout::relative_slash_path;
use fabexport::domain::value_objects::ConfigWarning;
use fabexport::infrastructure::ArchiveSummary;
use fabexport::ExportResult;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        eprintln!("⚠ {}", w);
    }
}

pub fn print_export(result: &ExportResult) {
    println!(
        "✓ Exported {} artifacts for {} in {:.1}s",
        result.artifacts.len(),
        result.project,
        result.elapsed_ms as f64 / 1000.0
    );
    for (heading, fabrication) in [("Documents", false), ("Fabrication", true)] {
        println!("  {}:", heading);
        for artifact in result
            .artifacts
            .iter()
            .filter(|a| a.kind.is_fabrication_file() == fabrication)
        {
            println!(
                "    {:<24} {}",
                artifact.kind.display_name(),
                display_path(&result.project_root, &artifact.path)
            );
        }
    }
    if let Some(rows) = result.bom_rows {
        println!("  BOM rows: {}", rows);
    }
    if let Some(readme) = &result.readme {
        println!("✓ README: {}", display_path(&result.project_root, readme));
    }
    if let Some(manifest) = &result.manifest {
        println!("✓ Manifest: {}", display_path(&result.project_root, manifest));
    }
}

pub fn print_archive(summary: &ArchiveSummary) {
    println!(
        "✓ Archived {} files into {}",
        summary.entries.len(),
        summary.path.display()
    );
}

pub fn print_check(report: &CheckReport) {
    for item in &report.items {
        let icon = match item.status {
            CheckStatus::Pass => "✓",
            CheckStatus::Warning => "⚠",
            CheckStatus::Error => "✗",
        };
        println!("{} {:<13} {}", icon, item.name, item.message);
        if item.status != CheckStatus::Pass {
            if let Some(fix) = &item.recommendation {
                println!("  ↳ {}", fix);
            }
        }
    }
    println!(
        "\n{} passed, {} warnings, {} errors",
        report.passed, report.warnings, report.errors
    );
}

fn display_path(root: &Path, path: &Path) -> String {
    relative_slash_path(root, path)
}
