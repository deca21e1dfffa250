//! Summarize OncoKB indicator responses.

use std::io::{BufRead, Read, Write};

use anyhow::Context;
use clap::Parser;
use indexmap::IndexMap;

use crate::common::io::std::{open_read_maybe_gz, open_write_or_stdout};
use crate::indicator::{
    calculate_oncokb_available_data_type, default_oncokb_indicator_filter,
    generate_id_to_indicator_map, IndicatorQueryResp, OncoKbCardDataType,
};

/// Command line arguments for `annotate indicator` sub command.
#[derive(Parser, Debug)]
#[command(about = "Summarize OncoKB indicator responses", long_about = None)]
pub struct Args {
    /// Path to the input file, a JSON array or JSON lines.
    #[arg(long)]
    pub path_input_json: String,
    /// Path to the output JSON file.  Use stdout if missing.
    #[arg(long)]
    pub path_output_json: Option<String>,
}

/// Summary of a set of indicator responses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSummary {
    /// Number of responses read.
    pub total: usize,
    /// Number of (likely) oncogenic responses.
    pub oncogenic: usize,
    /// Available annotation card data types.
    pub available_data_types: Vec<OncoKbCardDataType>,
    /// Responses by query identifier.
    pub indicators: IndexMap<String, IndicatorQueryResp>,
}

impl IndicatorSummary {
    /// Summarize the given responses.
    pub fn new(data: Vec<IndicatorQueryResp>) -> Self {
        let total = data.len();
        let oncogenic = data
            .iter()
            .filter(|indicator| default_oncokb_indicator_filter(indicator))
            .count();
        let available_data_types = calculate_oncokb_available_data_type(&data);
        Self {
            total,
            oncogenic,
            available_data_types,
            indicators: generate_id_to_indicator_map(data),
        }
    }
}

/// Read indicator responses, either as one JSON array or as JSON lines.
pub fn read_indicators<R: BufRead>(
    mut reader: R,
) -> Result<Vec<IndicatorQueryResp>, anyhow::Error> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(&contents).context("problem parsing JSON array");
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("problem parsing line {}", i + 1))
        })
        .collect()
}

/// Main entry point for `annotate indicator` sub command.
pub fn run(_common: &crate::common::Args, args: &Args) -> Result<(), anyhow::Error> {
    tracing::info!("config = {:#?}", &args);

    let data = read_indicators(open_read_maybe_gz(&args.path_input_json)?)
        .with_context(|| format!("problem reading {}", &args.path_input_json))?;
    let summary = IndicatorSummary::new(data);
    if summary.indicators.len() != summary.total {
        tracing::warn!(
            "{} responses share a query id with another response",
            summary.total - summary.indicators.len()
        );
    }
    tracing::info!(
        "{} of {} responses are oncogenic; available data types: {:?}",
        summary.oncogenic,
        summary.total,
        &summary.available_data_types
    );

    let mut writer = open_write_or_stdout(args.path_output_json.as_ref())?;
    serde_json::to_writer_pretty(&mut writer, &summary)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
