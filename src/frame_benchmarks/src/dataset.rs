use polars::prelude::*;

/// The fixed employee table every benchmarked operation runs against.
pub fn employees() -> Result<DataFrame, PolarsError> {
    let df = DataFrame::new(vec![
        Series::new(
            "name",
            &["Alice", "Bob", "Charlie", "David", "Eve", "Alice", "Bob"],
        ),
        Series::new("age", &[25i64, 30, 35, 40, 28, 25, 32]),
        Series::new(
            "salary",
            &[50000i64, 60000, 70000, 80000, 55000, 50000, 65000],
        ),
        Series::new(
            "department",
            &["IT", "HR", "IT", "Finance", "IT", "HR", "HR"],
        ),
    ])?;
    return Ok(df);
}
