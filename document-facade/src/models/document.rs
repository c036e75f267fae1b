use serde::{Deserialize, Serialize};

/// One entry of the gateway's `files` listing. Every field is optional; the
/// gateway also sends bookkeeping fields (`bucket`, `key`, `etag`, `status`)
/// that the projection ignores.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayFile {
    pub pk: Option<String>,
    pub id: Option<String>,
    pub checksum: Option<String>,
    pub hash: Option<String>,
    pub size: Option<i64>,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
    #[serde(rename = "processedAt")]
    pub processed_at: Option<String>,
    pub description: Option<String>,
}

/// Client-visible projection of a stored file's metadata. Recomputed from the
/// gateway response on every request; never persisted here.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<GatewayFile> for Document {
    fn from(file: GatewayFile) -> Self {
        // `pk` and `checksum` are authoritative; `id` and `hash` only fill in
        // when the primary field is absent.
        Self {
            id: file.pk.or(file.id),
            hash: file.checksum.or(file.hash),
            file_size: file.size,
            mime_type: file.content_type,
            created_at: file.processed_at,
            description: file.description,
        }
    }
}
