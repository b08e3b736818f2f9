use serde::Deserialize;
use std::fmt::Display;

use crate::record::js_escape;

pub const DEFAULT_COLORS: &str = "['#324F69','#919E4B', '#A34D4D', '#BEC8BE']";
pub const DEFAULT_LEGEND_LOCATION: &str = "bottom";
pub const DEFAULT_HEIGHT: u32 = 350;
pub const DEFAULT_WIDTH: u32 = 550;

/// The full ColumnChart option set recognized by the Google Visualization
/// API, as named, typed fields. Unknown keys in the incoming configuration
/// are ignored. Each option carries exactly one serialization rule: string
/// options become quoted JavaScript literals, everything else is emitted
/// bare (`colors` is bare because callers pass a JavaScript array or color
/// expression verbatim).
///
/// `on_select` is a callback expression consumed by the renderer's event
/// listener registration; it never appears in the options object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub axis_color: Option<String>,
    pub axis_background_color: Option<String>,
    pub axis_font_size: Option<f64>,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub colors: Option<String>,
    pub enable_tooltip: Option<bool>,
    pub focus_border_color: Option<String>,
    pub height: Option<u32>,
    pub is_3_d: Option<bool>,
    pub is_stacked: Option<bool>,
    pub legend: Option<String>,
    pub legend_background_color: Option<String>,
    pub legend_font_size: Option<f64>,
    pub legend_text_color: Option<String>,
    pub log_scale: Option<bool>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub on_select: Option<String>,
    pub reverse_axis: Option<bool>,
    pub show_categories: Option<bool>,
    pub title: Option<String>,
    pub title_color: Option<String>,
    pub title_font_size: Option<f64>,
    pub title_x: Option<String>,
    pub title_y: Option<String>,
    pub tooltip_font_size: Option<f64>,
    pub tooltip_height: Option<f64>,
    pub tooltip_width: Option<f64>,
    pub width: Option<u32>,
}

impl ChartOptions {
    /// Fill the documented fallbacks for options left unset: the color
    /// palette, legend position, height, and width. Every other option stays
    /// absent when unset.
    pub fn with_defaults(mut self) -> Self {
        self.colors.get_or_insert_with(|| DEFAULT_COLORS.to_string());
        self.legend
            .get_or_insert_with(|| DEFAULT_LEGEND_LOCATION.to_string());
        self.height.get_or_insert(DEFAULT_HEIGHT);
        self.width.get_or_insert(DEFAULT_WIDTH);
        self
    }

    /// One `options['key'] = value;` assignment per set option, in the fixed
    /// option order. Unset options are absent, not emitted as null.
    pub fn options_block(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.entries() {
            out.push_str(&format!("            options['{}'] = {};\r", key, value));
        }
        out
    }

    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        quoted(&mut entries, "axisColor", &self.axis_color);
        quoted(&mut entries, "axisBackgroundColor", &self.axis_background_color);
        bare(&mut entries, "axisFontSize", &self.axis_font_size);
        quoted(&mut entries, "backgroundColor", &self.background_color);
        quoted(&mut entries, "borderColor", &self.border_color);
        bare(&mut entries, "colors", &self.colors);
        bare(&mut entries, "enableTooltip", &self.enable_tooltip);
        quoted(&mut entries, "focusBorderColor", &self.focus_border_color);
        bare(&mut entries, "height", &self.height);
        bare(&mut entries, "is3D", &self.is_3_d);
        bare(&mut entries, "isStacked", &self.is_stacked);
        quoted(&mut entries, "legend", &self.legend);
        quoted(
            &mut entries,
            "legendBackgroundColor",
            &self.legend_background_color,
        );
        bare(&mut entries, "legendFontSize", &self.legend_font_size);
        quoted(&mut entries, "legendTextColor", &self.legend_text_color);
        bare(&mut entries, "logScale", &self.log_scale);
        bare(&mut entries, "max", &self.max);
        bare(&mut entries, "min", &self.min);
        bare(&mut entries, "reverseAxis", &self.reverse_axis);
        bare(&mut entries, "showCategories", &self.show_categories);
        quoted(&mut entries, "title", &self.title);
        quoted(&mut entries, "titleColor", &self.title_color);
        bare(&mut entries, "titleFontSize", &self.title_font_size);
        quoted(&mut entries, "titleX", &self.title_x);
        quoted(&mut entries, "titleY", &self.title_y);
        bare(&mut entries, "tooltipFontSize", &self.tooltip_font_size);
        bare(&mut entries, "tooltipHeight", &self.tooltip_height);
        bare(&mut entries, "tooltipWidth", &self.tooltip_width);
        bare(&mut entries, "width", &self.width);
        entries
    }
}

fn quoted(entries: &mut Vec<(&'static str, String)>, key: &'static str, opt: &Option<String>) {
    if let Some(v) = opt {
        entries.push((key, format!("'{}'", js_escape(v))));
    }
}

fn bare<T: Display>(entries: &mut Vec<(&'static str, String)>, key: &'static str, opt: &Option<T>) {
    if let Some(v) = opt {
        entries.push((key, v.to_string()));
    }
}
