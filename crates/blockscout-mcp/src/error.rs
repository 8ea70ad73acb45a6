//! Conversion from core errors to MCP protocol errors.

use blockscout_core::Error;
use rmcp::ErrorData;

/// Extension trait mapping [`blockscout_core::Error`] onto MCP error codes.
pub trait McpErrorExt {
    /// Convert to an MCP `ErrorData` carrying the error's display string.
    fn to_mcp_error(&self) -> ErrorData;
}

impl McpErrorExt for Error {
    fn to_mcp_error(&self) -> ErrorData {
        let message = self.to_string();
        match self {
            Error::InvalidParams(_) => ErrorData::invalid_params(message, None),
            e if e.is_not_found() => ErrorData::resource_not_found(message, None),
            _ => ErrorData::internal_error(message, None),
        }
    }
}
