use serde::{Deserialize, Serialize};

use crate::Error;

/// Tag names that pass through the markup filter with their name intact.
pub const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "big", "br", "center", "code", "em", "h1", "h2", "h3",
    "h4", "h5", "h6", "hr", "i", "img", "li", "ol", "p", "s", "small",
    "span", "strong", "table", "td", "tr", "u", "ul",
];

/// Event-handler keywords masked wherever they occur inside a tag.
///
/// Applied in this order, one pass per keyword.
pub const DENIED_ATTRIBUTES: &[&str] = &[
    "onblur", "onchange", "onclick", "ondblclick", "onfocus",
    "onkeydown", "onkeypress", "onkeyup", "onload", "onmousedown",
    "onmousemove", "onmouseout", "onmouseover", "onmouseup", "onreset",
    "onselect", "onsubmit", "onunload",
];

/// Replacement written over rejected tag names and attribute keywords.
pub const BLOCKED: &str = "blocked";

/// Allow-list and deny-list used by a [`Sanitizer`](crate::Sanitizer).
///
/// The default policy is [`ALLOWED_TAGS`] and [`DENIED_ATTRIBUTES`]. A policy
/// can also be read from JSON:
///
/// ```
/// use tagfilter::Policy;
///
/// let policy = Policy::from_json(r#"{ "allowed_tags": ["B", "i"] }"#).unwrap();
/// assert!(policy.is_allowed("b"));
/// assert!(!policy.is_allowed("img"));
/// assert_eq!(policy.denied_attributes().len(), 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPolicy")]
pub struct Policy {
    allowed_tags: Vec<String>,
    denied_attributes: Vec<String>,
}

/// Policy as written in a file, before lowercasing and validation.
#[derive(Deserialize)]
struct RawPolicy {
    #[serde(default = "default_allowed_tags")]
    allowed_tags: Vec<String>,
    #[serde(default = "default_denied_attributes")]
    denied_attributes: Vec<String>,
}

impl TryFrom<RawPolicy> for Policy {
    type Error = Error;

    fn try_from(raw: RawPolicy) -> Result<Self, Self::Error> {
        Policy {
            allowed_tags: raw.allowed_tags,
            denied_attributes: raw.denied_attributes,
        }
        .normalized()
    }
}

fn default_allowed_tags() -> Vec<String> {
    ALLOWED_TAGS.iter().map(|tag| (*tag).to_owned()).collect()
}

fn default_denied_attributes() -> Vec<String> {
    DENIED_ATTRIBUTES.iter().map(|attr| (*attr).to_owned()).collect()
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            allowed_tags: default_allowed_tags(),
            denied_attributes: default_denied_attributes(),
        }
    }
}

impl Policy {
    /// Builds a policy from explicit lists. Entries are lowercased and the
    /// deny-list order is kept as given.
    pub fn new<A, D>(allowed_tags: A, denied_attributes: D) -> Result<Self, Error>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Self {
            allowed_tags: allowed_tags.into_iter().map(|t| t.as_ref().to_owned()).collect(),
            denied_attributes: denied_attributes
                .into_iter()
                .map(|a| a.as_ref().to_owned())
                .collect(),
        }
        .normalized()
    }

    /// Parses a policy from a JSON document with optional `allowed_tags`
    /// and `denied_attributes` arrays. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let raw: RawPolicy = serde_json::from_str(json)?;
        Policy::try_from(raw)
    }

    pub fn allowed_tags(&self) -> &[String] {
        &self.allowed_tags
    }

    pub fn denied_attributes(&self) -> &[String] {
        &self.denied_attributes
    }

    /// Case-insensitive allow-list lookup.
    pub fn is_allowed(&self, tag_name: &str) -> bool {
        is_listed(&self.allowed_tags, tag_name)
    }

    fn normalized(mut self) -> Result<Self, Error> {
        for tag in &mut self.allowed_tags {
            *tag = tag.to_lowercase();
        }
        for attr in &mut self.denied_attributes {
            // An empty keyword would match between every character.
            if attr.is_empty() {
                return Err(Error::InvalidPolicy("denied attribute must not be empty"));
            }
            *attr = attr.to_lowercase();
        }
        Ok(self)
    }
}

pub(crate) fn is_listed<S: AsRef<str>>(list: &[S], name: &str) -> bool {
    let name = name.to_lowercase();
    list.iter().any(|entry| entry.as_ref() == name)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_policy_matches_constants() {
        let policy = Policy::default();
        assert_eq!(policy.allowed_tags().len(), ALLOWED_TAGS.len());
        assert_eq!(policy.denied_attributes()[0], "onblur");
        assert_eq!(policy.denied_attributes()[17], "onunload");
    }

    #[test]
    fn lookup_ignores_case() {
        let policy = Policy::default();
        assert!(policy.is_allowed("IMG"));
        assert!(policy.is_allowed("h6"));
        assert!(!policy.is_allowed("h7"));
        assert!(!policy.is_allowed("script"));
        assert!(!policy.is_allowed(""));
    }

    #[test]
    fn json_entries_are_lowercased() {
        let policy =
            Policy::from_json(r#"{"allowed_tags": ["DIV"], "denied_attributes": ["OnError"]}"#)
                .unwrap();
        assert_eq!(policy.allowed_tags(), ["div".to_owned()]);
        assert_eq!(policy.denied_attributes(), ["onerror".to_owned()]);
    }

    #[test]
    fn empty_keyword_is_rejected() {
        let err = Policy::new(["b"], [""]).unwrap_err();
        assert!(matches!(err, Error::InvalidPolicy(_)));
    }

    #[test]
    fn deserialize_normalizes_entries() {
        let policy: Policy =
            serde_json::from_str(r#"{"allowed_tags": ["B"], "denied_attributes": ["OnError"]}"#)
                .unwrap();
        assert_eq!(policy.allowed_tags(), ["b".to_owned()]);
        assert_eq!(policy.denied_attributes(), ["onerror".to_owned()]);
    }

    #[test]
    fn deserialize_rejects_empty_keyword() {
        let result = serde_json::from_str::<Policy>(
            r#"{"allowed_tags": ["B"], "denied_attributes": ["OnError", ""]}"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("denied attribute must not be empty"));
    }

    #[test]
    fn serialized_policy_reads_back() {
        let policy = Policy::new(["b", "I"], ["onclick"]).unwrap();
        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(serde_json::from_str::<Policy>(&json).unwrap(), policy);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Policy::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::PolicyParse(_)));
    }
}
