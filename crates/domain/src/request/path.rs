//! Path templates with `{name}` placeholders.

use std::collections::BTreeMap;

use crate::error::{DomainError, DomainResult};

/// Splits a path template into segments, substituting placeholders.
///
/// Segments are returned unencoded; the caller percent-encodes each one.
/// A trailing slash yields a trailing empty segment.
pub(crate) fn render_segments(
    template: &str,
    params: &BTreeMap<String, String>,
) -> DomainResult<Vec<String>> {
    let trimmed = template.strip_prefix('/').unwrap_or(template);
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split('/')
        .map(|segment| match placeholder_name(segment) {
            Some(name) => params.get(name).cloned().ok_or_else(|| {
                DomainError::MissingPathParam {
                    name: name.to_string(),
                    template: template.to_string(),
                }
            }),
            None => Ok(segment.to_string()),
        })
        .collect()
}

/// Returns the placeholder name if the whole segment is `{name}`.
fn placeholder_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_substitutes_placeholders() {
        let segments =
            render_segments("/pet/{petId}/uploadImage", &params(&[("petId", "999")])).unwrap();
        assert_eq!(segments, ["pet", "999", "uploadImage"]);
    }

    #[test]
    fn test_keeps_trailing_slash() {
        let segments = render_segments("/pet/", &BTreeMap::new()).unwrap();
        assert_eq!(segments, ["pet", ""]);
    }

    #[test]
    fn test_missing_param_is_an_error() {
        let err = render_segments("/user/{username}", &BTreeMap::new()).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingPathParam {
                name: "username".to_string(),
                template: "/user/{username}".to_string(),
            }
        );
    }

    #[test]
    fn test_root_path_has_no_segments() {
        assert!(render_segments("/", &BTreeMap::new()).unwrap().is_empty());
    }
}
