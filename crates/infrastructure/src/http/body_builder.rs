//! HTTP request body builder.
//!
//! Turns a domain `RequestBody` into something reqwest can send. File fields
//! are read here, so a missing fixture surfaces before any request goes out.

#![allow(missing_docs)]

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use petstore_domain::request::{FormDataField, RequestBody};
use reqwest::multipart::{Form, Part};

/// Error type for body building operations.
#[derive(Debug, thiserror::Error)]
pub enum BodyBuildError {
    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Failed to read file.
    #[error("Failed to read file: {message}")]
    FileReadError { path: String, message: String },

    /// Invalid body configuration.
    #[error("Invalid body configuration: {message}")]
    InvalidConfig { message: String },

    /// Serialization error.
    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

/// Result of building a body.
#[derive(Debug)]
pub enum BuiltBody {
    /// No body.
    None,
    /// Text/JSON body with content type.
    Text {
        content: String,
        content_type: String,
    },
    /// Multipart form data.
    Multipart(Form),
}

/// Build an HTTP body from a domain body.
///
/// Relative file paths resolve against `fixtures_dir` when given.
#[allow(clippy::missing_errors_doc)]
pub async fn build_body(
    body: &RequestBody,
    fixtures_dir: Option<&Path>,
) -> Result<BuiltBody, BodyBuildError> {
    match body {
        RequestBody::None => Ok(BuiltBody::None),

        RequestBody::Json { content } => {
            let json_str =
                serde_json::to_string(content).map_err(|e| BodyBuildError::SerializationError {
                    message: e.to_string(),
                })?;
            Ok(BuiltBody::Text {
                content: json_str,
                content_type: "application/json".to_string(),
            })
        }

        RequestBody::FormUrlencoded { fields } => {
            let encoded = serde_urlencoded::to_string(fields).map_err(|e| {
                BodyBuildError::SerializationError {
                    message: e.to_string(),
                }
            })?;
            Ok(BuiltBody::Text {
                content: encoded,
                content_type: "application/x-www-form-urlencoded".to_string(),
            })
        }

        RequestBody::FormData { fields } => {
            let form = build_multipart_form(fields, fixtures_dir).await?;
            Ok(BuiltBody::Multipart(form))
        }
    }
}

/// Build a multipart form from form data fields.
async fn build_multipart_form(
    fields: &[FormDataField],
    fixtures_dir: Option<&Path>,
) -> Result<Form, BodyBuildError> {
    let mut form = Form::new();

    for field in fields {
        match field {
            FormDataField::Text { name, value } => {
                form = form.text(name.clone(), value.clone());
            }
            FormDataField::File { name, path } => {
                let file_path = resolve_path(path, fixtures_dir);
                let content = read_fixture(&file_path).await?;

                let filename = file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("file")
                    .to_string();

                let mime_type = mime_guess::from_path(&file_path)
                    .first_or_octet_stream()
                    .to_string();

                let part = Part::bytes(content)
                    .file_name(filename)
                    .mime_str(&mime_type)
                    .map_err(|e| BodyBuildError::InvalidConfig {
                        message: format!("Invalid MIME type: {e}"),
                    })?;

                form = form.part(name.clone(), part);
            }
        }
    }

    Ok(form)
}

async fn read_fixture(path: &Path) -> Result<Vec<u8>, BodyBuildError> {
    tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            BodyBuildError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            BodyBuildError::FileReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        }
    })
}

/// Resolve a path relative to the fixtures directory or as absolute.
fn resolve_path(path: &str, fixtures_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(path);
    match fixtures_dir {
        Some(dir) if !path.is_absolute() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

impl BuiltBody {
    /// Get the Content-Type header value.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Text { content_type, .. } => Some(content_type),
            // reqwest sets the multipart type along with its boundary.
            Self::None | Self::Multipart(_) => None,
        }
    }
}
