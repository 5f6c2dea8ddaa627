//! Response types for the Email Activity API.
//!
//! Message entries are kept as ordered field-to-value maps rather than typed
//! structs: the provider controls the field set and the table layer derives
//! its header from whatever comes back, so no response schema is imposed.

use serde::{Deserialize, Serialize};

/// One message-activity entry: a flat, ordered mapping from field name to
/// scalar value. The `msg_id` field is the provider's internal identifier.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Decoded body of a `/messages` response.
#[derive(Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Record>,
}
