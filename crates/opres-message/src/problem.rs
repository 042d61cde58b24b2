// SPDX-License-Identifier: MIT OR Apache-2.0
//! RFC 7807 problem details payload.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Details;

/// Structured error payload in the shape described by RFC 7807.
///
/// Every member is optional. Unknown members land in [`extensions`](Self::extensions)
/// when deserializing and are written back inline when serializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,

    /// Short, human-readable summary of the problem type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// HTTP status code generated for this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Human-readable explanation specific to this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI reference identifying this specific occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Additional problem-type specific members.
    #[serde(flatten)]
    pub extensions: Details,
}

impl ProblemDetails {
    /// Create a payload with only a title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the status code.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the occurrence-specific explanation.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the problem type URI.
    #[must_use]
    pub fn with_type(mut self, problem_type: impl Into<String>) -> Self {
        self.problem_type = Some(problem_type.into());
        self
    }

    /// Set the occurrence URI.
    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Attach an extension member. Values that fail to serialize are skipped.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.extensions.insert(key.into(), v);
        }
        self
    }

    /// Flatten the payload into a details map.
    ///
    /// Standard members come first (`type`, `title`, `status`, `detail`,
    /// `instance`), absent ones are left out, then extensions in their
    /// original order. An extension never shadows a standard member.
    pub fn to_details(&self) -> Details {
        let mut details = Details::new();
        let standard: [(&str, Option<Value>); 5] = [
            ("type", self.problem_type.clone().map(Into::into)),
            ("title", self.title.clone().map(Into::into)),
            ("status", self.status.map(Into::into)),
            ("detail", self.detail.clone().map(Into::into)),
            ("instance", self.instance.clone().map(Into::into)),
        ];
        for (key, value) in standard {
            if let Some(v) = value {
                details.insert(key.to_string(), v);
            }
        }
        for (key, value) in &self.extensions {
            if !details.contains_key(key) {
                details.insert(key.clone(), value.clone());
            }
        }
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_details_orders_standard_members_first() {
        let pd = ProblemDetails::new("Not Found")
            .with_extension("resource", "user")
            .with_instance("/users/42")
            .with_status(404)
            .with_type("https://example.com/not-found");
        let keys: Vec<_> = pd.to_details().keys().cloned().collect();
        assert_eq!(keys, ["type", "title", "status", "instance", "resource"]);
    }

    #[test]
    fn to_details_skips_absent_members() {
        let details = ProblemDetails::default().to_details();
        assert!(details.is_empty());
    }

    #[test]
    fn extension_cannot_shadow_standard_member() {
        let pd = ProblemDetails::new("Conflict").with_extension("title", "shadow");
        assert_eq!(pd.to_details()["title"], json!("Conflict"));
    }

    #[test]
    fn serde_uses_rfc_member_names() {
        let pd = ProblemDetails::new("Bad Request")
            .with_type("about:blank")
            .with_status(400)
            .with_extension("field", "email");
        let value = serde_json::to_value(&pd).unwrap();
        assert_eq!(
            value,
            json!({"type": "about:blank", "title": "Bad Request", "status": 400, "field": "email"})
        );
        let back: ProblemDetails = serde_json::from_value(value).unwrap();
        assert_eq!(back, pd);
    }
}
