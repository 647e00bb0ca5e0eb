use dioxus::prelude::*;
use shared_types::{Role, Session};

use crate::routes::Route;
use crate::session::{use_session, SessionStore};

/// Result of checking the stored session against a dashboard's role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateDecision {
    Admit(Session),
    Redirect,
}

/// Client-side check only. It decides what to render; it protects nothing on
/// the backend.
pub fn check_gate(store: &dyn SessionStore, required: Role) -> GateDecision {
    match store.get() {
        Some(session) if session.grants(required) => GateDecision::Admit(session),
        _ => GateDecision::Redirect,
    }
}

/// Renders `children` only for a session holding `required`; everyone else is
/// sent to the login screen.
///
/// The check runs in a mount effect, so server-rendered HTML and the first
/// client frame both show the placeholder. Children are not mounted, and so
/// fetch nothing, until the gate admits.
#[component]
pub fn SessionGate(required: Role, children: Element) -> Element {
    let session = use_session();
    let mut decision = use_signal(|| Option::<GateDecision>::None);

    use_effect(move || {
        let verdict = check_gate(session.store(), required);
        if verdict == GateDecision::Redirect {
            tracing::info!(%required, "no matching session, redirecting to login");
            navigator().replace(Route::Login {});
        }
        decision.set(Some(verdict));
    });

    gate_view(decision(), children)
}

/// What the gate shows for a decision. `children` appear only on `Admit`.
fn gate_view(decision: Option<GateDecision>, children: Element) -> Element {
    match decision {
        Some(GateDecision::Admit(_)) => rsx! { {children} },
        Some(GateDecision::Redirect) => rsx! {
            div { class: "gate-placeholder", "Redirecting to login..." }
        },
        None => rsx! {
            div { class: "gate-placeholder", "Checking session..." }
        },
    }
}
