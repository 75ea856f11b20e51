use serde::{Deserialize, Serialize};

/// Success body shared by every generation route.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    pub output: String,
}
