use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};

use seer_column::input::{self, ChartRequest};
use seer_column::render::ChartSequence;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "seer-column")]
#[command(about = "Emit Google Visualization ColumnChart JavaScript from chart data", long_about = None)]
struct Args {
    /// Input format of the chart request read from stdin
    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Container element id used when the request does not name one
    #[arg(long, default_value = "chart")]
    element: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Read the chart request from stdin
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read chart request from stdin")?;

    let mut request = match args.format {
        Format::Json => ChartRequest::from_json(&raw)?,
        Format::Csv => input::read_csv(raw.as_bytes())?,
    };
    if request.in_element.is_none() {
        request.in_element = Some(args.element);
    }

    // Render the script block
    let chart = request.into_chart()?;
    let mut sequence = ChartSequence::new();
    let js = chart
        .to_js(&mut sequence)
        .context("Failed to render chart")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(js.as_bytes())
        .context("Failed to write script to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
