use bytes::Bytes;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// One uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadRequest {
    pub fn new(filename: impl Into<String>, content_type: Option<&str>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: Some(filename.into()),
            content_type: content_type.map(str::to_string),
            data: data.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}
