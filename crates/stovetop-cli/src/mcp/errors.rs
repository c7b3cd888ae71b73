//! Error handling utilities for MCP server

use rmcp::ErrorData;
use stovetop_core::KitchenError;

/// Helper to convert kitchen errors to MCP errors
///
/// Requests the caller can fix (unknown ID, nothing selected) become
/// `invalid_params`; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &KitchenError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        KitchenError::NotFound { .. } | KitchenError::Validation { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_caller_errors_are_invalid_params() {
        let err = to_mcp_error("Could not add dish", &KitchenError::not_found("x"));
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Could not add dish: Recipe with ID 'x' not found"));
    }

    #[test]
    fn test_service_errors_are_internal() {
        let err = to_mcp_error("Failed", &KitchenError::generation("quota"));
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
