use polars::prelude::pivot::pivot_stable;
use polars::prelude::*;

use crate::ops::api::FrameToolKit;

pub struct FrameMethods {}

impl FrameToolKit for FrameMethods {
    fn describe(&self, df: &DataFrame) -> Result<DataFrame, PolarsError> {
        df.describe(None)
    }

    fn value_counts(&self, df: &DataFrame, column: &str) -> Result<DataFrame, PolarsError> {
        df.clone()
            .lazy()
            .group_by([col(column)])
            .agg([count().alias("counts")])
            .sort(
                "counts",
                SortOptions {
                    descending: true,
                    ..Default::default()
                },
            )
            .collect()
    }

    fn fill_missing(&self, df: &DataFrame, fill_value: &str) -> Result<DataFrame, PolarsError> {
        // Only text columns take a string sentinel; integer columns keep
        // their dtype.
        let text_columns = df
            .get_columns()
            .iter()
            .filter(|series| series.dtype() == &DataType::Utf8)
            .map(|series| series.name().to_string())
            .collect::<Vec<String>>();

        df.clone()
            .lazy()
            .with_columns([cols(text_columns).fill_null(lit(fill_value))])
            .collect()
    }

    fn pivot_mean(
        &self,
        df: &DataFrame,
        values: &str,
        index: &str,
        columns: &str,
    ) -> Result<DataFrame, PolarsError> {
        pivot_stable(
            df,
            [values],
            [index],
            [columns],
            true,
            Some(col("").mean()),
            None,
        )
    }

    fn count_row_values(&self, df: &DataFrame) -> Result<DataFrame, PolarsError> {
        let mut total = lit(0u32);
        for name in df.get_column_names() {
            total = total + col(name).is_not_null().cast(DataType::UInt32);
        }

        df.clone()
            .lazy()
            .select([total.alias("non_null_count")])
            .collect()
    }
}
