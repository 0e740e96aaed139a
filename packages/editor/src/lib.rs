//! # Blocksmith Editor
//!
//! The parameter reconciliation engine: two-way synchronization between a
//! live editing form and an externally-owned parameter bag.
//!
//! ## The problem
//!
//! While a block is being edited, two parties hold its params: the editing
//! form (keystrokes land here first) and the outside owner (the page,
//! which may also be updated by autosave round-trips or collaborators).
//! Each side must pick up the other's changes without overwriting fresher
//! state and without the classic feedback loop where an emitted change
//! comes back as an "external" update and resets the form mid-keystroke.
//!
//! ## The state machine
//!
//! Each editing session is an explicit state machine with two transitions
//! and one guard flag:
//!
//! - **Inbound** ([`ParamSession::absorb_external`]): an external params
//!   change arrives. If it deep-equals the last value this session itself
//!   emitted, it is our own echo - ignore it. If it validates, reset the
//!   form to the validated value. If it does not, keep the current form
//!   (stale-but-valid beats crashed).
//! - **Outbound** ([`ParamSession::edit_field`]): a field edit lands. If
//!   the form no longer validates, hold - nothing propagates until it
//!   does. If it validates to exactly the last known external value, the
//!   edit is a no-op - suppress it. Otherwise record the value as our own
//!   echo and emit it.
//!
//! Emissions always carry a schema-validated, fully-defaulted object,
//! never a partial or raw form value.

mod reconcile;

pub use reconcile::{Inbound, Outbound, ParamSession};
