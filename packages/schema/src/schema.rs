//! Schema parsing: defaults, field validation, refinements.

use crate::field::{value_kind, FieldSpec, FieldType};
use crate::params::Params;
use crate::refinement::Refinement;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// One field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Dotted/indexed path of the offending field, e.g. `links[1].url`.
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Re-root an issue produced by a nested list item schema.
    fn nested(self, field: &str, index: usize) -> Self {
        let path = if self.path.is_empty() {
            format!("{}[{}]", field, index)
        } else {
            format!("{}[{}].{}", field, index, self.path)
        };
        Self { path, ..self }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Join issues into one line for error display.
pub fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("expected a parameter object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("parameter validation failed: {}", format_issues(.issues))]
    Validation { issues: Vec<FieldIssue> },
}

/// Non-panicking validation outcome, for callers that treat failure as a
/// normal branch rather than an error to propagate.
#[derive(Debug, Clone, PartialEq)]
pub enum SafeParse {
    Valid(Params),
    Invalid(Vec<FieldIssue>),
}

impl SafeParse {
    pub fn ok(self) -> Option<Params> {
        match self {
            SafeParse::Valid(params) => Some(params),
            SafeParse::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, SafeParse::Valid(_))
    }
}

/// Declarative description of a block's parameter shape.
///
/// Built once per block variant at registration time, then shared. Parsing
/// is pure; see the crate docs for the determinism contract.
#[derive(Debug, Clone, Default)]
pub struct BlockSchema {
    fields: Vec<FieldSpec>,
    refinements: Vec<Refinement>,
}

impl BlockSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one field. Field order is preserved and drives editor form
    /// layout.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        debug_assert!(
            !self.fields.iter().any(|f| f.name == spec.name),
            "duplicate field name '{}'",
            spec.name
        );
        self.fields.push(spec);
        self
    }

    /// Append several fields at once.
    pub fn extend_fields(mut self, specs: impl IntoIterator<Item = FieldSpec>) -> Self {
        for spec in specs {
            self = self.field(spec);
        }
        self
    }

    /// Attach a cross-field refinement. Refinements must accept the
    /// schema's own defaults, otherwise `parse({})` could not succeed.
    pub fn refine(mut self, refinement: Refinement) -> Self {
        self.refinements.push(refinement);
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The fully-defaulted params object. Always valid by construction.
    pub fn defaults(&self) -> Params {
        let mut params = Params::new();
        for field in &self.fields {
            params.insert(field.name.to_string(), field.default.clone());
        }
        params
    }

    /// Validate and normalize `candidate`.
    ///
    /// Missing fields take their defaults; unknown keys are dropped; every
    /// present field is type-checked independently, so one bad field never
    /// blocks another field's default. Refinements run only once all fields
    /// pass. Fails on a non-object candidate (`null` counts as empty).
    pub fn parse(&self, candidate: &Value) -> Result<Params, SchemaError> {
        let empty = Params::new();
        let source = match candidate {
            Value::Null => &empty,
            Value::Object(map) => map,
            other => {
                return Err(SchemaError::NotAnObject {
                    found: value_kind(other),
                })
            }
        };

        let mut params = Params::new();
        let mut issues = Vec::new();

        for field in &self.fields {
            match source.get(field.name) {
                None | Some(Value::Null) => {
                    params.insert(field.name.to_string(), field.default.clone());
                }
                Some(value) => match &field.ty {
                    FieldType::List(item_schema) => {
                        self.check_list(field, item_schema, value, &mut params, &mut issues)
                    }
                    _ => match field.check_scalar(value) {
                        Ok(normalized) => {
                            params.insert(field.name.to_string(), normalized);
                        }
                        Err(message) => issues.push(FieldIssue::new(field.name, message)),
                    },
                },
            }
        }

        if issues.is_empty() {
            for refinement in &self.refinements {
                if !refinement.check(&params) {
                    issues.push(FieldIssue::new(refinement.path(), refinement.message()));
                }
            }
        }

        if issues.is_empty() {
            Ok(params)
        } else {
            Err(SchemaError::Validation { issues })
        }
    }

    fn check_list(
        &self,
        field: &FieldSpec,
        item_schema: &BlockSchema,
        value: &Value,
        params: &mut Params,
        issues: &mut Vec<FieldIssue>,
    ) {
        let Some(items) = value.as_array() else {
            issues.push(FieldIssue::new(
                field.name,
                format!("expected a list, found {}", value_kind(value)),
            ));
            return;
        };

        let mut normalized = Vec::with_capacity(items.len());
        let before = issues.len();
        for (index, item) in items.iter().enumerate() {
            match item_schema.parse(item) {
                Ok(item_params) => normalized.push(Value::Object(item_params)),
                Err(SchemaError::Validation { issues: nested }) => {
                    issues.extend(nested.into_iter().map(|iss| iss.nested(field.name, index)));
                }
                Err(err) => {
                    issues.push(FieldIssue::new(
                        format!("{}[{}]", field.name, index),
                        err.to_string(),
                    ));
                }
            }
        }
        if issues.len() == before {
            params.insert(field.name.to_string(), Value::Array(normalized));
        }
    }

    /// Validation outcome as a value instead of a `Result`.
    pub fn safe_parse(&self, candidate: &Value) -> SafeParse {
        match self.parse(candidate) {
            Ok(params) => SafeParse::Valid(params),
            Err(SchemaError::Validation { issues }) => SafeParse::Invalid(issues),
            Err(err @ SchemaError::NotAnObject { .. }) => {
                SafeParse::Invalid(vec![FieldIssue::new("", err.to_string())])
            }
        }
    }

    /// The universal fallback: validated params, or the schema defaults if
    /// the candidate is unusable. Never fails, never panics.
    pub fn parse_or_defaults(&self, candidate: &Value) -> Params {
        match self.safe_parse(candidate) {
            SafeParse::Valid(params) => params,
            SafeParse::Invalid(issues) => {
                debug!(issues = %format_issues(&issues), "params invalid, using schema defaults");
                self.defaults()
            }
        }
    }
}
