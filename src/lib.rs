// Library exports for seer-column

pub mod config;
pub mod input;
pub mod record;
pub mod render;
pub mod table;

pub use config::ChartOptions;
pub use record::{FieldValue, Record};
pub use render::{ChartSequence, ColumnChart};
