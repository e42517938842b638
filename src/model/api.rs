use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// `kind` is a stable machine-readable category (`validation`, `not_found`,
/// `conflict`, `unauthorized`, `forbidden`, `internal`) the caller can branch on,
/// `error` is the human-readable message.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorDto {
    pub kind: String,
    pub error: String,
}

/// Plain acknowledgement body for endpoints without a resource to return.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageDto {
    pub message: String,
}
