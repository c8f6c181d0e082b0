//! Error handling utilities for MCP server

use rmcp::ErrorData;
use shifted_core::TrackerError;

/// Convert a tracker error into an MCP error.
///
/// Errors caused by the caller's input (bad fields, unknown IDs, missing
/// permission) become `invalid_params` so the client can correct the call.
/// Everything else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        TrackerError::InvalidInput { .. }
        | TrackerError::InvalidDate { .. }
        | TrackerError::ProjectNotFound { .. }
        | TrackerError::TaskNotFound { .. }
        | TrackerError::PermissionDenied { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
