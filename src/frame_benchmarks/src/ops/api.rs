use polars::prelude::*;

/// The five dataframe operations the suite times. Each one derives a new
/// frame; the input is never mutated.
pub trait FrameToolKit {
    fn describe(&self, df: &DataFrame) -> Result<DataFrame, PolarsError>;
    fn value_counts(&self, df: &DataFrame, column: &str) -> Result<DataFrame, PolarsError>;
    fn fill_missing(&self, df: &DataFrame, fill_value: &str) -> Result<DataFrame, PolarsError>;
    fn pivot_mean(
        &self,
        df: &DataFrame,
        values: &str,
        index: &str,
        columns: &str,
    ) -> Result<DataFrame, PolarsError>;
    fn count_row_values(&self, df: &DataFrame) -> Result<DataFrame, PolarsError>;
}
