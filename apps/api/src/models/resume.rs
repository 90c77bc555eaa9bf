use serde::{Deserialize, Serialize};

/// An uploaded resume: the client-side file descriptor plus the extracted text.
///
/// The descriptor (name, size, last-modified) stands in for content identity
/// when fingerprinting a search, so the text itself is never hashed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFile {
    pub file_name: String,
    pub size_bytes: u64,
    /// Milliseconds since the Unix epoch, as reported by the client.
    pub last_modified: i64,
    pub text: String,
}

/// A rendered page of the resume, sent to the tailoring model as a layout hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeImage {
    pub media_type: String,
    /// Base64 body, with or without a `data:` URL prefix.
    pub data: String,
}

impl ResumeImage {
    /// Strips a `data:<mime>;base64,` prefix if the client sent a data URL.
    pub fn base64_body(&self) -> &str {
        match self.data.split_once(',') {
            Some((prefix, body)) if prefix.starts_with("data:") => body,
            _ => &self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_body_strips_data_url_prefix() {
        let image = ResumeImage {
            media_type: "image/jpeg".to_string(),
            data: "data:image/jpeg;base64,QUJD".to_string(),
        };
        assert_eq!(image.base64_body(), "QUJD");

        let raw = ResumeImage {
            media_type: "image/png".to_string(),
            data: "QUJD".to_string(),
        };
        assert_eq!(raw.base64_body(), "QUJD");
    }
}
