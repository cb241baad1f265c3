//! HTTP Request body types

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{DomainError, DomainResult};

/// A single multipart form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormDataField {
    /// Plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// File field. Relative paths resolve against the fixtures directory.
    File {
        /// Field name.
        name: String,
        /// Path to the file on disk.
        path: String,
    },
}

impl FormDataField {
    /// Creates a text field.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a file field.
    #[must_use]
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Request body with format-specific content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// No body
    None,
    /// JSON body with structured content.
    Json {
        /// The JSON content (object, array, or primitive).
        content: JsonValue,
    },
    /// URL-encoded form fields, sent in declaration order.
    FormUrlencoded {
        /// Form fields as key-value pairs.
        fields: Vec<(String, String)>,
    },
    /// Multipart form data.
    FormData {
        /// Text values or file references.
        fields: Vec<FormDataField>,
    },
}

impl RequestBody {
    /// Creates an empty body.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a JSON body from a `serde_json::Value`.
    #[must_use]
    pub const fn json(content: JsonValue) -> Self {
        Self::Json { content }
    }

    /// Creates a JSON body by serializing any serde type.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn json_from<T: Serialize>(value: &T) -> DomainResult<Self> {
        serde_json::to_value(value)
            .map(Self::json)
            .map_err(|e| DomainError::InvalidBody(e.to_string()))
    }

    /// Creates a URL-encoded form body.
    #[must_use]
    pub fn form<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::FormUrlencoded {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Creates a multipart form-data body.
    #[must_use]
    pub const fn form_data(fields: Vec<FormDataField>) -> Self {
        Self::FormData { fields }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(json!({"key": "value"}));
        assert_eq!(
            body,
            RequestBody::Json {
                content: json!({"key": "value"})
            }
        );
    }

    #[test]
    fn test_form_keeps_order() {
        let body = RequestBody::form([("name", "Puppy"), ("status", "available")]);
        assert_eq!(
            body,
            RequestBody::FormUrlencoded {
                fields: vec![
                    ("name".to_string(), "Puppy".to_string()),
                    ("status".to_string(), "available".to_string()),
                ],
            }
        );
    }

    #[test]
    fn test_json_from_serializable() {
        #[derive(Serialize)]
        struct Sample {
            id: u32,
        }

        let body = RequestBody::json_from(&Sample { id: 7 }).unwrap();
        assert_eq!(body, RequestBody::json(json!({"id": 7})));
    }

    #[test]
    fn test_form_data_keeps_fields() {
        let body = RequestBody::form_data(vec![FormDataField::file("file", "image.jpg")]);
        assert_eq!(
            body,
            RequestBody::FormData {
                fields: vec![FormDataField::File {
                    name: "file".to_string(),
                    path: "image.jpg".to_string(),
                }],
            }
        );
    }
}
