use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::io;

use crate::config::ChartOptions;
use crate::render::ColumnChart;

/// A chart request as received over the wire: the outer data collection, the
/// series block, and the chart options. Records are JSON objects; accessors
/// are their field names.
#[derive(Debug, Deserialize)]
pub struct ChartRequest {
    pub data: Vec<Value>,
    #[serde(default)]
    pub in_element: Option<String>,
    pub series: SeriesRequest,
    #[serde(default)]
    pub chart_options: ChartOptions,
}

#[derive(Debug, Deserialize)]
pub struct SeriesRequest {
    pub series_label: String,
    pub data_label: String,
    pub data_method: String,
    pub data_series: Vec<Vec<Value>>,
}

impl ChartRequest {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("malformed chart request")
    }

    pub fn into_chart(self) -> Result<ColumnChart<Value, Value>> {
        ColumnChart::new(
            self.data,
            self.series.data_series,
            &self.series.series_label,
            &self.series.data_label,
            &self.series.data_method,
            self.in_element.as_deref().unwrap_or("chart"),
            self.chart_options,
        )
    }
}

/// Build a chart request from CSV with headers: the first column supplies
/// row labels, each remaining column contributes one data series named by
/// its header.
pub fn read_csv<R: io::Read>(reader: R) -> Result<ChartRequest> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .context("failed to read CSV headers")?
        .clone();
    if headers.len() < 2 {
        bail!("CSV input needs a label column and at least one value column");
    }

    let mut data_series: Vec<Vec<Value>> = vec![Vec::new(); headers.len() - 1];
    let mut row_count = 0;
    for result in csv_reader.records() {
        let record = result.context("failed to read CSV record")?;
        let label = record.get(0).unwrap_or("").to_string();
        for column in 1..headers.len() {
            let raw = record.get(column).unwrap_or("").trim();
            let value: f64 = raw.parse().with_context(|| {
                format!(
                    "non-numeric value '{}' in column '{}'",
                    raw, &headers[column]
                )
            })?;
            data_series[column - 1].push(json!({ "label": label, "value": value }));
        }
        row_count += 1;
    }
    if row_count == 0 {
        bail!("CSV input must contain at least one data row");
    }

    let data = headers
        .iter()
        .skip(1)
        .map(|header| json!({ "name": header }))
        .collect();

    Ok(ChartRequest {
        data,
        in_element: None,
        series: SeriesRequest {
            series_label: "name".to_string(),
            data_label: "label".to_string(),
            data_method: "value".to_string(),
            data_series,
        },
        chart_options: ChartOptions::default(),
    })
}
