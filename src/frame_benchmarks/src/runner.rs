use std::time::{Duration, Instant};

/// Measure wall-clock time for a single invocation of `func`.
pub fn measure<F, R>(func: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = func();
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Render one timing line, milliseconds to three decimal places.
pub fn format_timing(label: &str, elapsed: Duration) -> String {
    format!("{}: {:.3} ms", label, elapsed.as_secs_f64() * 1000.0)
}

/// Time one call and print its result line to stdout.
///
/// An `Err` from the call propagates unchanged and nothing is printed.
pub fn benchmark<F, R, E>(label: &str, func: F) -> Result<R, E>
where
    F: FnOnce() -> Result<R, E>,
{
    let (result, elapsed) = measure(func);
    let value = result?;
    println!("{}", format_timing(label, elapsed));
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::PolarsError;

    #[test]
    fn measure_returns_value_and_elapsed() {
        let (value, elapsed) = measure(|| 1 + 1);
        assert_eq!(value, 2);
        assert!(elapsed.as_secs_f64() >= 0.0);
    }

    #[test]
    fn timing_line_format() {
        let line = format_timing("X", Duration::from_micros(1500));
        assert_eq!(line, "X: 1.500 ms");
    }

    #[test]
    fn timing_line_has_three_decimals() {
        let line = format_timing("Describe", Duration::from_secs(1));
        assert!(line.starts_with("Describe: "));
        assert!(line.ends_with(" ms"));
        let number = line
            .trim_start_matches("Describe: ")
            .trim_end_matches(" ms");
        let decimals = number.split('.').nth(1).expect("Should have a fraction");
        assert_eq!(decimals.len(), 3);
        assert!(number.parse::<f64>().expect("Should parse") >= 0.0);
    }

    #[test]
    fn benchmark_returns_inner_value() {
        let result = benchmark("X", || Ok::<i32, PolarsError>(42));
        assert_eq!(result.expect("Callable succeeded"), 42);
    }

    #[test]
    fn benchmark_propagates_errors() {
        let result = benchmark("X", || {
            Err::<i32, PolarsError>(PolarsError::ComputeError("boom".into()))
        });
        assert!(result.is_err());
    }
}
