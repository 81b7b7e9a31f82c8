use contracts::domain::a001_monthly_record::MonthlyRecord;
use contracts::domain::a002_category_series::CategorySeries;
use contracts::domain::a003_year_comparison::YearComparison;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

static DATASET: OnceCell<Dataset> = OnceCell::new();

/// Loaded input tables, read once at startup and never mutated afterwards.
/// Everything derived (metrics, chart series, KPI values) is recomputed per
/// request from this context.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub pnl: PnlTable,
    pub categories: CategoryTable,
    pub year_comparison: YearComparison,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PnlTable {
    /// Monthly records in chronological order. Order is positional; the
    /// `month` field is a display label, never parsed or sorted.
    pub records: Vec<MonthlyRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTable {
    /// Labels addressed by `CategoryPoint::month_index` (1-based).
    pub month_labels: Vec<String>,
    pub series: Vec<CategorySeries>,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("dataset contains no monthly records")]
    NoRecords,
    #[error("category '{0}' has no points")]
    EmptyCategory(String),
    #[error("category '{0}' month indexes are not strictly increasing")]
    UnorderedCategory(String),
    #[error("year comparison columns differ in length")]
    YearColumnMismatch,
}

impl Dataset {
    pub fn parse(text: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = toml::from_str(text)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Structural validation at the loading boundary. The metrics calculator
    /// itself never validates; malformed numbers flow through as-is.
    fn validate(&self) -> Result<(), DatasetError> {
        if self.pnl.records.is_empty() {
            return Err(DatasetError::NoRecords);
        }

        for series in &self.categories.series {
            if series.points.is_empty() {
                return Err(DatasetError::EmptyCategory(series.name.clone()));
            }
            if !series.is_monotonic() {
                return Err(DatasetError::UnorderedCategory(series.name.clone()));
            }
        }

        let yc = &self.year_comparison;
        let months = yc.months.len();
        if yc.prior_full.len() != months
            || yc.prior_mtd.len() != months
            || yc.current_mtd.len() != months
        {
            return Err(DatasetError::YearColumnMismatch);
        }

        Ok(())
    }
}

/// Load the dataset and store it in the process-wide context.
///
/// With no configured path the embedded default dataset is used, mirroring
/// how configuration falls back to its embedded default.
pub fn initialize_dataset(path: Option<&Path>) -> anyhow::Result<()> {
    let dataset = match path {
        Some(path) => {
            tracing::info!("Loading dataset from: {}", path.display());
            let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Dataset::parse(&text)?
        }
        None => {
            tracing::info!("Using embedded default dataset");
            Dataset::parse(DEFAULT_DATASET)?
        }
    };

    tracing::info!(
        "Dataset ready: {} monthly records, {} categories, {} comparison months",
        dataset.pnl.records.len(),
        dataset.categories.series.len(),
        dataset.year_comparison.months.len()
    );

    DATASET
        .set(dataset)
        .map_err(|_| anyhow::anyhow!("Failed to set DATASET"))?;
    Ok(())
}

pub fn get_dataset() -> &'static Dataset {
    DATASET.get().expect("Dataset has not been initialized")
}

/// Default dataset embedded in the binary: eight months of pharmacy P&L
/// figures. December carries sales only, so every derived field for that
/// month is absent.
const DEFAULT_DATASET: &str = r#"
[[pnl.records]]
month = "Dec-24"
sales = 228857.0

[[pnl.records]]
month = "Jan-25"
sales = 210334.0
cost_of_sales = 115598.0
invoices = 10741.0
units_sold = 44936.0

[[pnl.records]]
month = "Feb-25"
sales = 224291.0
cost_of_sales = 124581.0
invoices = 12328.0
units_sold = 49605.0

[[pnl.records]]
month = "Mar-25"
sales = 234264.0
cost_of_sales = 136693.0
invoices = 12505.0
units_sold = 51391.0

[[pnl.records]]
month = "Apr-25"
sales = 222966.0
cost_of_sales = 131728.0
invoices = 12378.0
units_sold = 50173.0

[[pnl.records]]
month = "May-25"
sales = 239450.0
cost_of_sales = 137145.0
invoices = 13031.0
units_sold = 50364.0

[[pnl.records]]
month = "Jun-25"
sales = 279327.0
cost_of_sales = 157043.0
invoices = 13537.0
units_sold = 53817.0

[[pnl.records]]
month = "Jul-25"
sales = 145032.0
cost_of_sales = 83020.0
invoices = 6823.0
units_sold = 29884.0

[categories]
month_labels = ["Jan-25", "Feb-25", "Mar-25", "Apr-25", "May-25", "Jun-25", "Jul-25"]

[[categories.series]]
name = "Pharmacy"
points = [
    { month_index = 1, sales = 120873.0 },
    { month_index = 2, sales = 130167.0 },
    { month_index = 3, sales = 135107.0 },
    { month_index = 4, sales = 138826.0 },
    { month_index = 5, sales = 142470.0 },
    { month_index = 6, sales = 150131.0 },
    { month_index = 7, sales = 96736.0 },
]

[[categories.series]]
name = "Miscellaneous"
points = [
    { month_index = 1, sales = 58379.0 },
    { month_index = 2, sales = 63710.0 },
    { month_index = 3, sales = 65781.0 },
    { month_index = 4, sales = 67468.0 },
    { month_index = 5, sales = 77845.0 },
    { month_index = 6, sales = 78124.0 },
    { month_index = 7, sales = 33357.0 },
]

[[categories.series]]
name = "Medical Equipment"
points = [
    { month_index = 1, sales = 19704.0 },
    { month_index = 2, sales = 21705.0 },
    { month_index = 3, sales = 23592.0 },
    { month_index = 4, sales = 24156.0 },
    { month_index = 5, sales = 27582.0 },
    { month_index = 6, sales = 28743.0 },
    { month_index = 7, sales = 14939.0 },
]

[year_comparison]
prior_year = "2024"
current_year = "2025"
months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"]
prior_full = [142891.0, 135770.0, 114702.0, 89007.0, 187180.0, 187065.0, 217887.0]
prior_mtd = [60503.0, 65440.0, 69809.0, 41953.0, 81763.0, 94854.0, 100339.0]
current_mtd = [89108.0, 112908.0, 108825.0, 136043.0, 128450.0, 141758.0, 145032.0]
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_parses() {
        let dataset = Dataset::parse(DEFAULT_DATASET).unwrap();

        assert_eq!(dataset.pnl.records.len(), 8);
        let first = &dataset.pnl.records[0];
        assert_eq!(first.month, "Dec-24");
        assert_eq!(first.sales, 228857.0);
        assert!(first.cost_of_sales.is_none());
        assert!(first.invoices.is_none());
        assert!(first.units_sold.is_none());

        assert_eq!(dataset.categories.series.len(), 3);
        assert_eq!(dataset.categories.month_labels.len(), 7);
        assert_eq!(dataset.categories.series[0].name, "Pharmacy");
        assert_eq!(dataset.categories.series[0].points.len(), 7);

        assert_eq!(dataset.year_comparison.months.len(), 7);
        assert_eq!(dataset.year_comparison.current_mtd[6], 145032.0);
    }

    #[test]
    fn test_empty_records_rejected() {
        let text = r#"
            [pnl]
            records = []

            [categories]
            month_labels = []
            series = []

            [year_comparison]
            prior_year = "2024"
            current_year = "2025"
            months = []
            prior_full = []
            prior_mtd = []
            current_mtd = []
        "#;
        let err = Dataset::parse(text).unwrap_err();
        assert!(matches!(err, DatasetError::NoRecords));
    }

    #[test]
    fn test_unordered_category_rejected() {
        let text = r#"
            [[pnl.records]]
            month = "Jan-25"
            sales = 100.0

            [categories]
            month_labels = ["Jan-25", "Feb-25"]

            [[categories.series]]
            name = "Pharmacy"
            points = [
                { month_index = 2, sales = 10.0 },
                { month_index = 1, sales = 20.0 },
            ]

            [year_comparison]
            prior_year = "2024"
            current_year = "2025"
            months = []
            prior_full = []
            prior_mtd = []
            current_mtd = []
        "#;
        let err = Dataset::parse(text).unwrap_err();
        assert!(matches!(err, DatasetError::UnorderedCategory(name) if name == "Pharmacy"));
    }

    #[test]
    fn test_mismatched_year_columns_rejected() {
        let text = r#"
            [[pnl.records]]
            month = "Jan-25"
            sales = 100.0

            [categories]
            month_labels = []
            series = []

            [year_comparison]
            prior_year = "2024"
            current_year = "2025"
            months = ["Jan", "Feb"]
            prior_full = [1.0, 2.0]
            prior_mtd = [1.0]
            current_mtd = [1.0, 2.0]
        "#;
        let err = Dataset::parse(text).unwrap_err();
        assert!(matches!(err, DatasetError::YearColumnMismatch));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = Dataset::parse("not toml at all [").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }
}
