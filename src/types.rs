use serde::{Deserialize, Serialize};

/// One entry of a quality-keyed collection (images, download links).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Link {
    pub quality: String,
    pub link: String,
}

impl Link {
    pub fn new(quality: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            quality: quality.into(),
            link: link.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Success,
    Failed,
    Error,
}

/// The envelope every normalized response is wrapped in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failed,
            message: message.into(),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failed_envelope_serializes_null_data() {
        let value = serde_json::to_value(Envelope::failed("nope")).unwrap();
        assert_eq!(
            value,
            json!({ "status": "Failed", "message": "nope", "data": null })
        );
    }
}
