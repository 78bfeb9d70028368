//! DTO for the documentation request endpoint.

use serde::Deserialize;

use crate::domain::entities::{Category, DocRequest, UnknownCategory};

/// Payload sent by the chat web client.
///
/// Missing fields default to empty strings; an empty `type` is then
/// rejected as an unknown category.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateDocRequest {
    /// One of `admin`, `developer`, `handbook`.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub body: String,
    pub post_id: String,
}

impl TryFrom<CreateDocRequest> for DocRequest {
    type Error = UnknownCategory;

    fn try_from(dto: CreateDocRequest) -> Result<Self, Self::Error> {
        Ok(DocRequest {
            category: dto.kind.parse::<Category>()?,
            title: dto.title,
            body: dto.body,
            post_id: dto.post_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let dto: CreateDocRequest = serde_json::from_str(
            r#"{"type":"developer","title":"T","body":"B","post_id":"M1"}"#,
        )
        .unwrap();

        let request = DocRequest::try_from(dto).unwrap();
        assert_eq!(request.category, Category::Developer);
        assert_eq!(request.title, "T");
        assert_eq!(request.body, "B");
        assert_eq!(request.post_id, "M1");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let dto: CreateDocRequest = serde_json::from_str(r#"{"title":"T"}"#).unwrap();

        assert_eq!(dto.kind, "");
        assert_eq!(dto.post_id, "");
        assert!(DocRequest::try_from(dto).is_err());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let dto: CreateDocRequest = serde_json::from_str(r#"{"type":"marketing"}"#).unwrap();

        assert_eq!(
            DocRequest::try_from(dto).unwrap_err(),
            UnknownCategory("marketing".to_string())
        );
    }
}
