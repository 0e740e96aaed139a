//! End-to-end reconciliation scenarios: a full editing round-trip between
//! a form and its external owner, including the echo path.

use blocksmith_editor::{Inbound, Outbound, ParamSession};
use blocksmith_schema::{BlockSchema, FieldSpec, Params};
use serde_json::{json, Value};

fn hero_like_schema() -> BlockSchema {
    BlockSchema::new()
        .field(FieldSpec::text("title", "Title", "Welcome"))
        .field(FieldSpec::text("subtitle", "Subtitle", ""))
        .field(FieldSpec::url("cta_url", "Button link"))
        .field(FieldSpec::number("padding_top", "Top padding", 64.0))
}

/// The §"no-echo" property: one edit produces exactly one emission, and
/// the echoed update produces zero additional form resets.
#[test]
fn test_edit_then_echo_produces_single_emission() {
    let external_a = json!({"title": "Welcome", "subtitle": "Hi"});
    let mut session = ParamSession::new(hero_like_schema(), &external_a);

    let mut emissions: Vec<Params> = Vec::new();
    match session.edit_field("title", json!("New title")) {
        Outbound::Emit(params) => emissions.push(params),
        other => panic!("expected emission, got {:?}", other),
    }
    assert_eq!(emissions.len(), 1);

    // Owner stores emission and hands it back, as owners do.
    let echo = Value::Object(emissions[0].clone());
    assert_eq!(session.absorb_external(&echo), Inbound::Echo);

    // Editing a field back to the external value emits nothing.
    assert_eq!(
        session.edit_field("title", json!("New title")),
        Outbound::Unchanged
    );
}

/// An editing session survives a hostile sequence: corrupt inbound,
/// invalid local edits, then recovery - without ever emitting an invalid
/// or partial bag.
#[test]
fn test_hostile_sequence_never_emits_invalid_params() {
    let mut session = ParamSession::new(hero_like_schema(), &json!({}));
    let mut emissions: Vec<Params> = Vec::new();

    // Corrupt external update: ignored, form unchanged.
    assert_eq!(
        session.absorb_external(&json!({"cta_url": "::nope::"})),
        Inbound::Rejected
    );

    // Invalid local edit: held.
    assert!(matches!(
        session.edit_field("cta_url", json!("still not a url")),
        Outbound::Held(_)
    ));

    // Another edit while invalid: still held (the bad URL is still there).
    assert!(matches!(
        session.edit_field("title", json!("Draft")),
        Outbound::Held(_)
    ));

    // Fixing the URL releases one emission carrying both edits.
    match session.edit_field("cta_url", json!("https://example.com/buy")) {
        Outbound::Emit(params) => emissions.push(params),
        other => panic!("expected emission, got {:?}", other),
    }

    assert_eq!(emissions.len(), 1);
    let emitted = &emissions[0];
    assert_eq!(emitted.get("title"), Some(&json!("Draft")));
    assert_eq!(emitted.get("cta_url"), Some(&json!("https://example.com/buy")));
    // Defaults filled in; the emission is a complete bag.
    assert_eq!(emitted.get("padding_top"), Some(&json!(64.0)));
}

/// A genuine concurrent external change wins over local state, but our
/// own echo never does.
#[test]
fn test_external_change_vs_echo() {
    let mut session = ParamSession::new(hero_like_schema(), &json!({}));

    let Outbound::Emit(mine) = session.edit_field("title", json!("Mine")) else {
        panic!("expected emission");
    };

    // A collaborator's change arrives first: reset.
    assert_eq!(
        session.absorb_external(&json!({"title": "Collaborator"})),
        Inbound::Reset
    );
    assert_eq!(session.form().get("title"), Some(&json!("Collaborator")));

    // Our stale echo arrives afterwards: still recognized, not a reset.
    assert_eq!(
        session.absorb_external(&Value::Object(mine)),
        Inbound::Echo
    );
    assert_eq!(session.form().get("title"), Some(&json!("Collaborator")));
}
