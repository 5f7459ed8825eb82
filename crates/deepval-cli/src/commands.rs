use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use deepval_merge::{clone_value, merge_all, try_merge};
use deepval_types::{predicates, Value, ValueKind};
use serde::Serialize;

use crate::cli::*;
use crate::config::{CliConfig, OutputFormat};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output_format);
    match cli.command {
        Command::Classify(args) => cmd_classify(args, format),
        Command::Clone(args) => cmd_clone(args, &config),
        Command::Merge(args) => cmd_merge(args, &config),
    }
}

/// Predicate results for one value.
#[derive(Debug, PartialEq, Serialize)]
pub struct Classification {
    pub kind: ValueKind,
    pub is_array: bool,
    pub is_function: bool,
    pub is_object: bool,
    pub is_number: bool,
    pub is_valid: bool,
    pub is_boolean: bool,
    pub is_string: bool,
}

impl Classification {
    pub fn of(value: &Value) -> Self {
        Self {
            kind: value.kind(),
            is_array: predicates::is_array(value),
            is_function: predicates::is_function(value),
            is_object: predicates::is_object(value),
            is_number: predicates::is_number(value),
            is_valid: predicates::is_valid(value),
            is_boolean: predicates::is_boolean(value),
            is_string: predicates::is_string(value),
        }
    }

    fn rows(&self) -> [(&'static str, bool); 7] {
        [
            ("array", self.is_array),
            ("function", self.is_function),
            ("object", self.is_object),
            ("number", self.is_number),
            ("valid", self.is_valid),
            ("boolean", self.is_boolean),
            ("string", self.is_string),
        ]
    }
}

pub fn load_document(path: &Path) -> anyhow::Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = Value::from_json_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), kind = %value.kind(), "loaded document");
    Ok(value)
}

/// Merge `overlays` into `base` left to right.
pub fn merge_documents(mut base: Value, overlays: &[Value], strict: bool) -> anyhow::Result<Value> {
    if strict {
        for (i, overlay) in overlays.iter().enumerate() {
            try_merge(&mut base, overlay).with_context(|| format!("overlay #{}", i + 1))?;
        }
    } else {
        merge_all(&mut base, overlays);
    }
    Ok(base)
}

fn cmd_classify(args: ClassifyArgs, format: OutputFormat) -> anyhow::Result<()> {
    let value = load_document(&args.path)?;
    let report = Classification::of(&value);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("{} {}", "kind:".bold(), report.kind.to_string().cyan());
            for (name, hit) in report.rows() {
                let mark = if hit { "✓".green() } else { "✗".red() };
                println!("  {} is_{}", mark, name);
            }
        }
    }
    Ok(())
}

fn cmd_clone(args: CloneArgs, config: &CliConfig) -> anyhow::Result<()> {
    let value = load_document(&args.path)?;
    let copy = clone_value(&value);
    println!("{}", copy.to_json_string(config.pretty && !args.compact)?);
    Ok(())
}

fn cmd_merge(args: MergeArgs, config: &CliConfig) -> anyhow::Result<()> {
    let base = load_document(&args.base)?;
    let overlays = args
        .overlays
        .iter()
        .map(|p| load_document(p))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let merged = merge_documents(base, &overlays, config.strict || args.strict)?;
    let rendered = merged.to_json_string(config.pretty && !args.compact)?;
    match args.output {
        Some(path) => {
            fs::write(&path, rendered + "\n")
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} Merged {} overlay(s) into {}",
                "✓".green().bold(),
                overlays.len(),
                path.display().to_string().bold()
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
