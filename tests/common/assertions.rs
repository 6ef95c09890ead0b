//! Assertion macros with descriptive failure messages.

/// Assert that stdout or stderr contains `needle`.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Results saved to");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the process exit code.
///
/// # Example
/// ```ignore
/// assert_exit_code!(result, 1);
/// ```
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code, $code,
            "Unexpected exit code.\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}
