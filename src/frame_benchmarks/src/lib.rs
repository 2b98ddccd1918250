use polars::prelude::*;

pub mod dataset;
pub mod ops;
pub mod runner;

use crate::ops::api::FrameToolKit;
use crate::runner::benchmark;

/// Runs the fixed sequence of timed dataframe operations.
pub struct BenchSuite<T: FrameToolKit> {
    frame_methods: T,
}

impl<T: FrameToolKit> BenchSuite<T> {
    pub fn new(methods: T) -> Self {
        return BenchSuite {
            frame_methods: methods,
        };
    }

    /// Five timed calls in fixed order; each prints one line to stdout.
    pub fn run(&self, df: &DataFrame) -> Result<(), PolarsError> {
        benchmark("Describe", || self.frame_methods.describe(df))?;
        benchmark("Value counts", || self.frame_methods.value_counts(df, "name"))?;
        benchmark("FillNA", || self.frame_methods.fill_missing(df, "Unknown"))?;
        benchmark("Pivot table", || {
            self.frame_methods
                .pivot_mean(df, "salary", "department", "name")
        })?;
        benchmark("Apply", || self.frame_methods.count_row_values(df))?;
        Ok(())
    }
}
