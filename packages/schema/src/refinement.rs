//! Cross-field refinements.
//!
//! A refinement is a predicate over the whole (field-validated) params
//! object, with an error message and the field path the error attaches to.
//! Refinements only run once every field passed its own type check, so a
//! broken field never produces misleading refinement noise on top.

use crate::params::Params;
use regex::Regex;
use std::sync::OnceLock;

static URL_RE: OnceLock<Regex> = OnceLock::new();

fn url_regex() -> &'static Regex {
    URL_RE.get_or_init(|| {
        // scheme "://" followed by at least one non-whitespace character
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://\S+$").unwrap()
    })
}

/// Whether `candidate` is a well-formed absolute URL.
///
/// This is the rule behind [`crate::FieldType::Url`]: empty strings are
/// handled upstream (an unset URL is valid), non-empty strings land here.
pub fn is_absolute_url(candidate: &str) -> bool {
    url_regex().is_match(candidate)
}

/// A field-scoped validation predicate over the whole params object.
#[derive(Debug, Clone)]
pub struct Refinement {
    path: &'static str,
    message: &'static str,
    predicate: fn(&Params) -> bool,
}

impl Refinement {
    /// `predicate` returns `true` when the params are acceptable. The error
    /// message attaches to `path` when it returns `false`.
    pub fn new(path: &'static str, message: &'static str, predicate: fn(&Params) -> bool) -> Self {
        Self {
            path,
            message,
            predicate,
        }
    }

    /// The field path the error attaches to.
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Run the predicate. `true` means valid.
    pub fn check(&self, params: &Params) -> bool {
        (self.predicate)(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::str_param;
    use serde_json::{json, Value};

    #[test]
    fn test_absolute_urls_accepted() {
        assert!(is_absolute_url("https://example.com/x.png"));
        assert!(is_absolute_url("http://localhost:3000/a?b=c"));
        assert!(is_absolute_url("ftp://files.example.com/pub"));
    }

    #[test]
    fn test_malformed_urls_rejected() {
        assert!(!is_absolute_url("not a url"));
        assert!(!is_absolute_url("/relative/path.png"));
        assert!(!is_absolute_url("example.com/missing-scheme"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn test_refinement_checks_predicate() {
        let refinement = Refinement::new("linked_url", "link required when label is set", |p| {
            str_param(p, "label").is_empty() || !str_param(p, "linked_url").is_empty()
        });

        let Value::Object(ok) = json!({"label": "", "linked_url": ""}) else {
            unreachable!()
        };
        let Value::Object(bad) = json!({"label": "Go", "linked_url": ""}) else {
            unreachable!()
        };

        assert!(refinement.check(&ok));
        assert!(!refinement.check(&bad));
        assert_eq!(refinement.path(), "linked_url");
    }
}
