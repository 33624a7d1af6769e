use serde::{Deserialize, Serialize};

/// Search results from `/shodan/host/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Total number of results
    pub total: u64,

    /// Matching banners/services, in API order (acts as display rank)
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
}

impl SearchResults {
    /// Returns true if there are no results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the number of matches in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Individual match in search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    /// IP address as string
    pub ip_str: String,

    /// Port number
    pub port: u16,

    /// Organization that owns the IP
    #[serde(default)]
    pub org: Option<String>,

    /// Hostnames associated with this IP
    #[serde(default)]
    pub hostnames: Vec<String>,

    /// Geographic location
    #[serde(default)]
    pub location: Option<MatchLocation>,

    /// Product name (e.g., "Apache httpd", "nginx")
    #[serde(default)]
    pub product: Option<String>,
}

/// Location block embedded in a search match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchLocation {
    /// Full country name
    #[serde(default)]
    pub country_name: Option<String>,

    /// City name
    #[serde(default)]
    pub city: Option<String>,
}
