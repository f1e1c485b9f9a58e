//! Custom assertion macros and utilities
//!
//! Shortcuts for checking the JSON error envelope the API returns:
//! `{"error": ..., "status": ..., "field": ...}`.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert an error response: status code and, optionally, the field it names
#[macro_export]
macro_rules! assert_error {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        response.assert_status($status);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], $status.as_u16(), "unexpected body: {}", body);
        body
    }};
    ($response:expr, $status:expr, field = $field:expr) => {{
        let body = $crate::assert_error!($response, $status);
        assert_eq!(body["field"], $field, "unexpected body: {}", body);
        body
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
