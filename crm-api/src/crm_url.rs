use std::fmt;

use reqwest::Url;

use crate::CrmError;

/// Base URL of the CRM service with helpers for building resource paths.
#[derive(Debug, Clone, PartialEq)]
pub struct CrmUrl(String);

impl AsRef<str> for CrmUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CrmUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl CrmUrl {
    /// Parses and normalizes a base URL. Trailing slashes are dropped.
    pub fn parse(raw: &str) -> Result<Self, CrmError> {
        let trimmed = raw.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| CrmError::InvalidUrl(format!("{}: {}", raw, e)))?;
        Ok(Self(trimmed.to_string()))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// Append a record id as the last path segment.
    pub fn with_id(&self, id: i64) -> Self {
        self.append_path(&id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_collection_and_record_urls() {
        let base = CrmUrl::parse("http://localhost:8080/api/").unwrap();
        assert_eq!(base.as_ref(), "http://localhost:8080/api");

        let collection = base.append_path("/activities");
        assert_eq!(collection.as_ref(), "http://localhost:8080/api/activities");
        assert_eq!(
            collection.with_id(42).as_ref(),
            "http://localhost:8080/api/activities/42"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = CrmUrl::parse("not a url").unwrap_err();
        assert!(matches!(err, CrmError::InvalidUrl(_)));
    }
}
