// crates/cli/src/presentation.rs
use std::fmt::Write;

use group_fold_domain::{GroupTable, QueryOutcome};

use crate::{config::Config, error::Result, options::OutputFormat};

/// Render `outcome` in the configured format.
///
/// # Errors
/// Returns an error if serialization to JSON/YAML fails.
pub fn render(outcome: &QueryOutcome, config: &Config) -> Result<String> {
    let mut out = String::new();
    match config.format {
        OutputFormat::Table => write_table(&mut out, outcome, config)?,
        OutputFormat::Csv => write_csv(&mut out, outcome)?,
        OutputFormat::Md => write_markdown(&mut out, outcome, config)?,
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(outcome)?;
            out.push('\n');
        }
        OutputFormat::Yaml => out = render_yaml(outcome)?,
    }
    Ok(out)
}

#[cfg(feature = "yaml")]
fn render_yaml(outcome: &QueryOutcome) -> Result<String> {
    Ok(serde_yaml::to_string(outcome)?)
}

#[cfg(not(feature = "yaml"))]
fn render_yaml(_outcome: &QueryOutcome) -> Result<String> {
    Err(group_fold_shared_kernel::PresentationError::InvalidValue {
        flag: "--format".to_string(),
        value: "yaml".to_string(),
        reason: "built without the `yaml` feature".to_string(),
    }
    .into())
}

fn selection_caption(config: &Config) -> String {
    let query = &config.query;
    format!("Selected ({}, {})", query.field.as_str(), query.range)
}

fn write_table(out: &mut String, outcome: &QueryOutcome, config: &Config) -> std::fmt::Result {
    writeln!(out, "group_fold v{} · strategy={}", crate::VERSION, config.query.strategy.as_str())?;

    for table in &outcome.groups {
        writeln!(out)?;
        write_group_table(out, table)?;
    }

    writeln!(out)?;
    writeln!(out, "{}: {}", selection_caption(config), outcome.selected.len())?;
    for name in &outcome.selected {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}

fn write_group_table(out: &mut String, table: &GroupTable) -> std::fmt::Result {
    writeln!(out, "{}", table.label)?;
    writeln!(out, "{:<16}{:>8}     MEMBERS", "KEY", "COUNT")?;
    writeln!(out, "----------------------------------------------")?;
    for row in &table.rows {
        writeln!(out, "{:<16}{:>8}     {}", row.key, row.count, row.members.join(", "))?;
    }
    let total: usize = table.rows.iter().map(|r| r.count.value()).sum();
    writeln!(out, "---")?;
    writeln!(out, "{:<16}{total:>8}     TOTAL ({} groups)", "", table.rows.len())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_csv(out: &mut String, outcome: &QueryOutcome) -> std::fmt::Result {
    writeln!(out, "section,key,count,value")?;
    for table in &outcome.groups {
        for row in &table.rows {
            writeln!(
                out,
                "{},{},{},{}",
                csv_field(&table.label),
                csv_field(&row.key),
                row.count,
                csv_field(&row.members.join("; "))
            )?;
        }
    }
    for name in &outcome.selected {
        writeln!(out, "Selected,,,{}", csv_field(name))?;
    }
    Ok(())
}

fn write_markdown(out: &mut String, outcome: &QueryOutcome, config: &Config) -> std::fmt::Result {
    for table in &outcome.groups {
        writeln!(out, "### {}", table.label)?;
        writeln!(out)?;
        writeln!(out, "| Key | Count | Members |")?;
        writeln!(out, "|:---|---:|:---|")?;
        for row in &table.rows {
            writeln!(
                out,
                "| {} | {} | {} |",
                row.key.replace('|', "\\|"),
                row.count,
                row.members.join(", ").replace('|', "\\|")
            )?;
        }
        writeln!(out)?;
    }
    writeln!(out, "### {}", selection_caption(config))?;
    writeln!(out)?;
    for name in &outcome.selected {
        writeln!(out, "- {name}")?;
    }
    Ok(())
}
