use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use edscreen_core::run_screen;
use edscreen_model::SourceKind;
use edscreen_report::{OutputFormat, write_outputs};
use edscreen_standards::{ClassificationMapping, MatchRule, default_layout};

use edscreen_cli::run_config::build_run_config;

use crate::cli::{OutputFormatArg, ScreenArgs};
use crate::summary::apply_table_style;
use crate::types::ScreenOutcome;

pub fn run_sources() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Source", "Namespace", "Description", "Columns", "Match"]);
    apply_table_style(&mut table);
    for kind in SourceKind::ALL {
        let layout = default_layout(kind);
        let columns = layout
            .fields()
            .map(|(field, column)| format!("{field}={column}"))
            .collect::<Vec<_>>()
            .join(", ");
        let rules = layout
            .rules
            .iter()
            .map(MatchRule::describe)
            .collect::<Vec<_>>()
            .join(" or ");
        table.add_row(vec![
            kind.key().to_string(),
            kind.namespace().to_string(),
            kind.description().to_string(),
            columns,
            rules,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_categories() -> Result<()> {
    let mapping = ClassificationMapping::standard();
    let mut table = Table::new();
    table.set_header(vec!["#", "Category", "Hazard statement codes"]);
    apply_table_style(&mut table);
    for (index, category) in mapping.categories().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            category.label.to_string(),
            category.codes.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_screen_command(args: &ScreenArgs) -> Result<ScreenOutcome> {
    let span = info_span!("screen_command", input = %args.input.display());
    let _guard = span.enter();
    let started = Instant::now();

    let config = build_run_config(
        &args.input,
        args.config.as_deref(),
        args.databases.as_deref(),
        &args.sources,
    )?;
    let result = run_screen(&args.input, &config)?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let outputs = if args.dry_run {
        info!("dry run: no files written");
        None
    } else {
        let paths = write_outputs(&result, &args.input, &output_dir, output_format(args.format))
            .context("write outputs")?;
        Some(paths)
    };

    info!(
        substances = result.records.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "screening finished"
    );
    Ok(ScreenOutcome {
        input: args.input.clone(),
        output_dir,
        result,
        outputs,
    })
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("output")
}

fn output_format(format: OutputFormatArg) -> OutputFormat {
    match format {
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
        OutputFormatArg::Both => OutputFormat::Both,
    }
}
