use serde::{Deserialize, Serialize};

/// Response payload of the floof endpoint. The live API also returns a
/// `link` field; unknown fields are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FloofPayload {
    pub image: String,
}
