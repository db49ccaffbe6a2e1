use serde::Deserialize;

// ---------------------------------------------------------------------------
// BulkDataIndex — response of the bulk-data discovery endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct BulkDataIndex {
    #[serde(default)]
    pub data: Vec<BulkDataDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkDataDescriptor {
    #[serde(rename = "type")]
    pub type_field: String,
    #[serde(default)]
    pub download_uri: Option<String>,
    pub name: Option<String>,
    pub updated_at: Option<String>,
    pub size: Option<u64>,
    pub content_type: Option<String>,
    pub content_encoding: Option<String>,
}

impl BulkDataIndex {
    /// Find the descriptor with the given type tag, if listed.
    pub fn find(&self, type_field: &str) -> Option<&BulkDataDescriptor> {
        self.data.iter().find(|d| d.type_field == type_field)
    }
}
