//! CLI handler for the analyze command.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::output::{
    output_json, print_header, print_kv, print_section, print_success, print_table, OutputMode,
};
use crate::init::AppContext;
use crate::models::{AnalysisReport, Document, RiskLevel};
use crate::utils::text::truncate;

pub async fn handle_analyze(
    ctx: &AppContext,
    file: &Path,
    language: &str,
    output: Option<&Path>,
    mode: OutputMode,
) -> Result<()> {
    let document = Document::from_file(file, language)?;
    let report = ctx.pipeline.analyze(&document).await;

    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        print_success(&format!("Report written to {}", path.display()));
    }

    if mode == OutputMode::Json {
        output_json(&report);
        return Ok(());
    }

    render_report(&report, file);
    Ok(())
}

fn render_report(report: &AnalysisReport, file: &Path) {
    print_header("Contract Analysis");
    print_kv("Document", &file.display().to_string());
    print_kv("Language", &report.language);
    print_kv("Clauses", &report.clause_count().to_string());
    print_kv(
        "Contract score",
        &format!(
            "{:.2} ({})",
            report.contract_score,
            level_cell(report.risk_level)
        ),
    );
    print_kv(
        "Risk distribution",
        &format!(
            "{} low / {} medium / {} high",
            report.risk_distribution.low,
            report.risk_distribution.medium,
            report.risk_distribution.high
        ),
    );
    print_kv(
        "Readability",
        &format!(
            "{:.0}/100 ({})",
            report.readability.score, report.readability.level
        ),
    );

    if report.flags.is_empty() {
        println!("\n{}", "No risk flags raised.".green());
    } else {
        print_header("Risk Flags");
        let rows: Vec<Vec<String>> = report
            .flags
            .iter()
            .enumerate()
            .map(|(i, flag)| {
                vec![
                    format!("{}", i + 1),
                    flag.category_id.clone(),
                    format!("{:.2}", flag.severity),
                    flag.matched_triggers.join(", "),
                    clause_excerpt(report, &flag.clause_id),
                ]
            })
            .collect();
        print_table(&["#", "Category", "Severity", "Triggers", "Clause"], rows);
    }

    if !report.category_summaries.is_empty() {
        print_header("Risk Categories");
        let rows: Vec<Vec<String>> = report
            .category_summaries
            .iter()
            .map(|s| {
                vec![
                    s.category_id.clone(),
                    format!("{}", s.count),
                    format!("{:.2}", s.mean_score),
                    level_cell(s.level),
                ]
            })
            .collect();
        print_table(&["Category", "Clauses", "Mean Score", "Level"], rows);
    }

    if !report.functional_counts.is_empty() {
        let counts: Vec<String> = report
            .functional_counts
            .iter()
            .map(|(category, count)| format!("{} ({})", category, count))
            .collect();
        print_kv("Clause types", &counts.join(", "));
    }

    if !report.key_terms.is_empty() {
        let terms: Vec<String> = report
            .key_terms
            .iter()
            .map(|t| format!("{} ({})", t.term, t.count))
            .collect();
        print_kv("Key terms", &terms.join(", "));
    }

    let recommendations: Vec<String> = report
        .recommendations
        .iter()
        .map(|r| format!("- {}", r))
        .collect();
    print_section("Recommendations", &recommendations.join("\n"));
}

/// Shortened clause text for table display, looked up by flag clause id.
fn clause_excerpt(report: &AnalysisReport, clause_id: &str) -> String {
    report
        .clauses
        .iter()
        .find(|c| c.clause.id == clause_id)
        .map(|c| truncate(&c.clause.text, 60))
        .unwrap_or_default()
}

fn level_cell(level: RiskLevel) -> String {
    match level {
        RiskLevel::High => level.label().red().bold().to_string(),
        RiskLevel::Medium => level.label().yellow().to_string(),
        RiskLevel::Low => level.label().green().to_string(),
    }
}
