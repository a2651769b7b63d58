//! Smartphone specification records and the CSV loader that produces them.
//!
//! Coercion policy
//! ---------------
//! The source table stores every cell as text. The four metric columns are
//! coerced to `f64`; a cell that fails to parse becomes `f64::NAN` and the
//! record is simply skipped wherever that metric is plotted or aggregated
//! (see `core::scene`). `Release_Date` is different: every view keys on the
//! release year, so a row whose year cannot be coerced is dropped at load
//! with a warning rather than carried around as a dead record.

use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Brand-filter sentinel meaning "no filtering".
pub const ALL_BRANDS: &str = "All";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("dataset has a header row but no data rows")]
    Empty,
}

/// One row of the specifications table. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhoneRecord {
    pub brand: String,
    pub model: String,
    pub os: String,
    pub processor: String,
    pub release_year: i32,
    pub battery: f64,
    pub memory: f64,
    pub primary_storage: f64,
    pub primary_camera: f64,
}

/// Selector for the four plottable metric columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MetricField {
    Battery,
    Memory,
    PrimaryStorage,
    PrimaryCamera,
}

impl MetricField {
    /// Metric value for one record. May be NaN when the source cell failed
    /// coercion; callers filter non-finite values out.
    pub fn value_of(self, record: &PhoneRecord) -> f64 {
        match self {
            Self::Battery => record.battery,
            Self::Memory => record.memory,
            Self::PrimaryStorage => record.primary_storage,
            Self::PrimaryCamera => record.primary_camera,
        }
    }

    /// Human name used in tooltips, e.g. "Battery Capacity".
    pub fn label(self) -> &'static str {
        match self {
            Self::Battery => "Battery Capacity",
            Self::Memory => "Memory Capacity",
            Self::PrimaryStorage => "Primary Storage Capacity",
            Self::PrimaryCamera => "Camera Resolution",
        }
    }

    /// Display unit for the metric.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Battery => "mAh",
            Self::Memory | Self::PrimaryStorage => "GB",
            Self::PrimaryCamera => "MP",
        }
    }
}

/// The loaded table, row order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<PhoneRecord>,
}

const REQUIRED_COLUMNS: [&str; 9] = [
    "Brand",
    "Model",
    "OS",
    "Processor",
    "Release_Date",
    "Battery",
    "Memory",
    "Primary_Storage",
    "Primary_Camera",
];

impl Dataset {
    /// Parse header-mapped CSV text. Column order is free and extra columns
    /// are ignored; a missing required column or an empty body is an error.
    pub fn from_csv(text: &str) -> Result<Self, DatasetError> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let header = lines.next().ok_or(DatasetError::Empty)?;
        let columns = split_csv_line(header);
        let mut index = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in index.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = columns
                .iter()
                .position(|col| col.trim() == name)
                .ok_or(DatasetError::MissingColumn(name))?;
        }

        let mut records = Vec::new();
        for (row_number, line) in lines.enumerate() {
            let cells = split_csv_line(line);
            let cell = |slot: usize| cells.get(index[slot]).map(String::as_str).unwrap_or("");

            let raw_year = cell(4);
            let release_year = match raw_year.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => value as i32,
                _ => {
                    warn!(row = row_number + 2, raw_year, "skipping row with unparsable release year");
                    continue;
                }
            };

            records.push(PhoneRecord {
                brand: cell(0).trim().to_string(),
                model: cell(1).trim().to_string(),
                os: cell(2).trim().to_string(),
                processor: cell(3).trim().to_string(),
                release_year,
                battery: coerce_numeric(cell(5)),
                memory: coerce_numeric(cell(6)),
                primary_storage: coerce_numeric(cell(7)),
                primary_camera: coerce_numeric(cell(8)),
            });
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self { records })
    }

    /// Distinct brands in first-seen order, with the `"All"` sentinel first.
    pub fn brands(&self) -> Vec<String> {
        let mut brands = vec![ALL_BRANDS.to_string()];
        for record in &self.records {
            if !brands.iter().any(|known| known == &record.brand) {
                brands.push(record.brand.clone());
            }
        }
        brands
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Text → number coercion for metric cells. Failures become NaN so the
/// record stays loadable; extent and aggregate computations filter NaN out.
fn coerce_numeric(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Split one CSV line honouring double-quoted fields (the same dialect our
/// own CSV writer emits: quotes doubled inside quoted fields).
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            other => current.push(other),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Brand,Model,OS,Processor,Release_Date,Battery,Memory,Primary_Storage,Primary_Camera
Samsung,Galaxy S7,Android,Exynos 8890,2016,3000,4,32,12
Apple,iPhone 7,iOS,A10,2016,1960,2,32,12
Xiaomi,Mi Note 10,Android,Snapdragon 730G,2019,5260,6,128,108
";

    #[test]
    fn parses_all_rows_with_typed_fields() {
        let dataset = Dataset::from_csv(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 3);
        let first = &dataset.records[0];
        assert_eq!(first.brand, "Samsung");
        assert_eq!(first.release_year, 2016);
        assert_eq!(first.battery, 3000.0);
    }

    #[test]
    fn column_order_is_free_and_extras_ignored() {
        let shuffled = "\
Model,Notes,Battery,Brand,OS,Processor,Release_Date,Memory,Primary_Storage,Primary_Camera
Pixel 4,flagship,2800,Google,Android,Snapdragon 855,2019,6,64,12.2
";
        let dataset = Dataset::from_csv(shuffled).unwrap();
        assert_eq!(dataset.records[0].brand, "Google");
        assert_eq!(dataset.records[0].primary_camera, 12.2);
    }

    #[test]
    fn malformed_metric_becomes_nan_but_row_survives() {
        let dirty = "\
Brand,Model,OS,Processor,Release_Date,Battery,Memory,Primary_Storage,Primary_Camera
Nokia,3310 Revival,KaiOS,Unisoc,2017,n/a,0.5,0.25,2
";
        let dataset = Dataset::from_csv(dirty).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(dataset.records[0].battery.is_nan());
        assert_eq!(dataset.records[0].memory, 0.5);
    }

    #[test]
    fn malformed_year_drops_the_row() {
        let dirty = "\
Brand,Model,OS,Processor,Release_Date,Battery,Memory,Primary_Storage,Primary_Camera
Nokia,Mystery,Android,Unknown,unknown,3000,4,64,13
Sony,Xperia 1,Android,Snapdragon 855,2019,3330,6,64,12
";
        let dataset = Dataset::from_csv(dirty).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].brand, "Sony");
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let truncated = "Brand,Model,OS,Processor,Release_Date,Battery,Memory,Primary_Storage\n";
        assert_eq!(
            Dataset::from_csv(truncated),
            Err(DatasetError::MissingColumn("Primary_Camera"))
        );
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let quoted = "\
Brand,Model,OS,Processor,Release_Date,Battery,Memory,Primary_Storage,Primary_Camera
OnePlus,\"8 Pro, 5G\",Android,\"Snapdragon 865, X55\",2020,4510,8,128,48
";
        let dataset = Dataset::from_csv(quoted).unwrap();
        assert_eq!(dataset.records[0].model, "8 Pro, 5G");
        assert_eq!(dataset.records[0].processor, "Snapdragon 865, X55");
    }

    #[test]
    fn brands_are_deduplicated_with_all_sentinel_first() {
        let dataset = Dataset::from_csv(SAMPLE).unwrap();
        assert_eq!(dataset.brands(), vec!["All", "Samsung", "Apple", "Xiaomi"]);
    }
}
