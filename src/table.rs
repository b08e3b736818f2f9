use anyhow::{anyhow, Result};
use crate::record::{js_escape, Record};

// Indentation used by the surrounding <script> template.
const PAD: &str = "            ";

/// Column declarations for the data table: the row count, the string axis
/// column, and one number column per category record, labeled via the
/// series-label accessor.
pub fn data_columns<C: Record>(
    categories: &[C],
    series_label: &str,
    row_count: usize,
) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!(
        "{}Seer.chartsData[chartIndex].addRows({});\r",
        PAD, row_count
    ));
    out.push_str(&format!(
        "{}Seer.chartsData[chartIndex].addColumn('string', 'Date');\r",
        PAD
    ));
    for (i, category) in categories.iter().enumerate() {
        let label = category.field(series_label).ok_or_else(|| {
            anyhow!("category record {} has no accessor '{}'", i, series_label)
        })?;
        out.push_str(&format!(
            "{}Seer.chartsData[chartIndex].addColumn('number', '{}');\r",
            PAD,
            js_escape(&label.to_label())
        ));
    }
    Ok(out)
}

/// The row-label domain: union of the row-label accessor applied to every
/// record across every series, first-seen order, duplicates removed. Union
/// order determines row indices.
pub fn row_labels<R: Record>(series: &[Vec<R>], data_label: &str) -> Result<Vec<String>> {
    let mut labels: Vec<String> = Vec::new();
    for (i, column) in series.iter().enumerate() {
        for (j, record) in column.iter().enumerate() {
            let value = record.field(data_label).ok_or_else(|| {
                anyhow!("series {} record {} has no accessor '{}'", i, j, data_label)
            })?;
            let label = value.to_label();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
    }
    Ok(labels)
}

/// Cell assignments binding each row label into column 0.
pub fn label_cells(labels: &[String]) -> String {
    let mut out = String::new();
    for (i, label) in labels.iter().enumerate() {
        out.push_str(&format!(
            "{}Seer.chartsData[chartIndex].setCell({}, 0,'{}');\r",
            PAD,
            i,
            js_escape(label)
        ));
    }
    out
}

/// Cell assignments for the data values: series i, record j lands at row j,
/// column i + 1 (column 0 is reserved for row labels). Row addressing comes
/// from the record's position within its own series, not from label matching,
/// so ragged series drift relative to the label column.
pub fn value_cells<R: Record>(series: &[Vec<R>], data_method: &str) -> Result<String> {
    let mut out = String::new();
    for (i, column) in series.iter().enumerate() {
        for (j, record) in column.iter().enumerate() {
            let value = record.field(data_method).ok_or_else(|| {
                anyhow!("series {} record {} has no accessor '{}'", i, j, data_method)
            })?;
            out.push_str(&format!(
                "Seer.chartsData[chartIndex].setCell({},{},{});\r",
                j,
                i + 1,
                value.to_js()
            ));
        }
    }
    Ok(out)
}
