use serde::{Deserialize, Serialize};

/// API plan information from `/api-info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Plan name
    #[serde(default)]
    pub plan: Option<String>,

    /// Available query credits
    #[serde(default)]
    pub query_credits: i32,

    /// Available scan credits
    #[serde(default)]
    pub scan_credits: i32,
}

impl ApiInfo {
    /// Returns true if there are query credits available
    #[must_use]
    pub const fn has_query_credits(&self) -> bool {
        self.query_credits > 0
    }

    /// Returns true if there are scan credits available
    #[must_use]
    pub const fn has_scan_credits(&self) -> bool {
        self.scan_credits > 0
    }
}
