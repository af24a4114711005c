//! Custom assertion macros and utilities
//!
//! Provides assertion macros for the API's JSON error bodies.

/// Assert the status and message of a JSON error response
///
/// Error bodies look like `{"message": "...", "status": 400}`.
#[macro_export]
macro_rules! assert_error {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), $status);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], $message, "unexpected error body: {}", body);
        assert_eq!(body["status"], $status.as_u16());
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
