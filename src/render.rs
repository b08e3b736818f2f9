use anyhow::{bail, Result};

use crate::config::ChartOptions;
use crate::record::Record;
use crate::table;

/// Source of chart indices for one page-rendering pass. Owned by the caller
/// so that multiple charts embedded in one page stay disambiguated without
/// any process-wide state.
#[derive(Debug, Default)]
pub struct ChartSequence {
    next: usize,
}

impl ChartSequence {
    pub fn new() -> Self {
        Self::default()
    }

    fn advance(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }
}

/// One ColumnChart render: the outer category collection (column headers),
/// the nested data series (rows and cells), the accessor names used to pull
/// labels and values out of the records, the target container element, and
/// the chart options.
#[derive(Debug)]
pub struct ColumnChart<C, R> {
    categories: Vec<C>,
    series: Vec<Vec<R>>,
    series_label: String,
    data_label: String,
    data_method: String,
    chart_element: String,
    options: ChartOptions,
}

impl<C: Record, R: Record> ColumnChart<C, R> {
    pub fn new(
        categories: Vec<C>,
        series: Vec<Vec<R>>,
        series_label: &str,
        data_label: &str,
        data_method: &str,
        chart_element: &str,
        options: ChartOptions,
    ) -> Result<Self> {
        if categories.is_empty() {
            bail!("missing required input: categories collection is empty");
        }
        if series.is_empty() {
            bail!("missing required input: data series collection is empty");
        }
        Ok(Self {
            categories,
            series,
            series_label: series_label.to_string(),
            data_label: data_label.to_string(),
            data_method: data_method.to_string(),
            chart_element: chart_element.to_string(),
            options: options.with_defaults(),
        })
    }

    /// Compose the final script block: library bootstrap, DataTable
    /// construction, options assignments, chart instantiation bound to the
    /// container element, and the optional select-listener registration.
    /// Any failure aborts the render; no partial output is produced.
    pub fn to_js(&self, sequence: &mut ChartSequence) -> Result<String> {
        let chart_index = sequence.advance();
        let labels = table::row_labels(&self.series, &self.data_label)?;
        let columns = table::data_columns(&self.categories, &self.series_label, labels.len())?;
        let mut cells = table::label_cells(&labels);
        cells.push_str(&table::value_cells(&self.series, &self.data_method)?);
        let listener = match &self.options.on_select {
            Some(callback) => format!(
                "\n            google.visualization.events.addListener(Seer.charts[chartIndex], 'select', {});",
                callback
            ),
            None => String::new(),
        };

        Ok(format!(
            r#"
        <script type="text/javascript">
          google.load('visualization', '1', {{'packages':['columnchart']}});
          google.setOnLoadCallback(drawChart);
          function drawChart() {{
            var chartIndex = {chart_index};
            Seer.chartsData[chartIndex] = new google.visualization.DataTable();
{columns}{cells}            var options = {{}};
{options}            var container = document.getElementById('{element}');
            Seer.charts[chartIndex] = new google.visualization.ColumnChart(container);
            Seer.charts[chartIndex].draw(Seer.chartsData[chartIndex], options);{listener}
          }}
        </script>
"#,
            chart_index = chart_index,
            columns = columns,
            cells = cells,
            options = self.options.options_block(),
            element = self.chart_element,
            listener = listener,
        ))
    }
}
