use serde::{Deserialize, Serialize};

/// Response from `/tools/myip`.
///
/// The endpoint returns a bare JSON string; parsing it as JSON is what
/// strips the surrounding quote characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MyIp(pub String);

impl MyIp {
    /// Get the IP address as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Try to parse as an IP address
    #[must_use]
    pub fn parse(&self) -> Option<std::net::IpAddr> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for MyIp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
