use serde::Deserialize;

use crate::types::record::ImageRecord;

/// Decoded body of one listing call: status plus the optional result payload.
///
/// Transient; constructed fresh per request and discarded once the caller's
/// page handler has consumed it. The upstream reports its own status in
/// `code` independently of the HTTP status line.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub result: Option<ListingResult>,
}

/// The result payload of a listing page.
///
/// Absent/zero-valued fields are omitted upstream rather than sent as null,
/// hence the blanket defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResult {
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub records: Vec<ImageRecord>,
    #[serde(default, rename = "searchCount")]
    pub search_count: bool,
    #[serde(default)]
    pub orders: Vec<String>,
}
