//! Custom assertion macros
//!
//! Shorthand for the status + body checks repeated across API tests.

/// Assert a response status, printing the body on mismatch
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "unexpected status, body: {}",
            $response.body
        );
    };
}

/// Assert an `{"error": ...}` response with the given status and message
#[macro_export]
macro_rules! assert_error {
    ($response:expr, $status:expr, $message:expr) => {
        $crate::assert_status!($response, $status);
        assert_eq!(
            $response.body,
            serde_json::json!({ "error": $message }),
            "unexpected error body"
        );
    };
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
