//! Per-session reconciliation state.

use blocksmith_schema::{BlockSchema, FieldIssue, Params, SafeParse};
use serde_json::Value;
use tracing::{debug, warn};

/// Outcome of an inbound external-params sync.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// The update was this session's own emission echoed back; ignored.
    Echo,
    /// The form was reset to the validated external value.
    Reset,
    /// The external value failed validation and was ignored; the current
    /// form state stands.
    Rejected,
}

/// Outcome of a local field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    /// The form validated and materially changed: propagate this bag to
    /// the external owner.
    Emit(Params),
    /// The form validated but equals the last known external value;
    /// nothing propagates.
    Unchanged,
    /// The form is currently invalid; emission is held until a later edit
    /// makes it validate again. Local editing continues.
    Held(Vec<FieldIssue>),
}

/// One editing session for one block instance.
///
/// State is strictly per-session: two mounted editors over the same
/// instance do not share anything and need no locking.
pub struct ParamSession {
    schema: BlockSchema,
    /// Raw form state. May be mid-edit invalid; only validated snapshots
    /// ever leave the session.
    form: Params,
    /// The last schema-valid value this session believes the external
    /// owner holds. Updated by inbound resets and outbound emissions.
    external: Params,
    /// Echo-suppression guard: the last value this session itself emitted.
    last_emitted: Option<Params>,
}

impl ParamSession {
    /// Open a session against the externally-owned `params`. Invalid
    /// external params start the form from schema defaults.
    pub fn new(schema: BlockSchema, params: &Value) -> Self {
        let validated = schema.parse_or_defaults(params);
        Self {
            schema,
            form: validated.clone(),
            external: validated,
            last_emitted: None,
        }
    }

    /// Current raw form state.
    pub fn form(&self) -> &Params {
        &self.form
    }

    /// Whether the current form state validates.
    pub fn is_valid(&self) -> bool {
        self.schema
            .safe_parse(&Value::Object(self.form.clone()))
            .is_valid()
    }

    /// Inbound transition: the external owner reports new params.
    pub fn absorb_external(&mut self, incoming: &Value) -> Inbound {
        if let Some(last) = &self.last_emitted {
            if incoming.as_object() == Some(last) {
                debug!("inbound update is our own echo, ignoring");
                return Inbound::Echo;
            }
        }

        match self.schema.safe_parse(incoming) {
            SafeParse::Valid(validated) => {
                self.form = validated.clone();
                self.external = validated;
                Inbound::Reset
            }
            SafeParse::Invalid(issues) => {
                warn!(
                    issues = %blocksmith_schema::format_issues(&issues),
                    "ignoring malformed external params"
                );
                Inbound::Rejected
            }
        }
    }

    /// Outbound transition: one form field changed locally.
    pub fn edit_field(&mut self, name: &str, value: Value) -> Outbound {
        self.form.insert(name.to_string(), value);

        match self.schema.safe_parse(&Value::Object(self.form.clone())) {
            SafeParse::Invalid(issues) => Outbound::Held(issues),
            SafeParse::Valid(validated) => {
                if validated == self.external {
                    return Outbound::Unchanged;
                }
                self.external = validated.clone();
                self.last_emitted = Some(validated.clone());
                Outbound::Emit(validated)
            }
        }
    }
}
