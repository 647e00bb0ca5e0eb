use dioxus::prelude::*;
use server::api::HttpApi;
use shared_types::{FeatureFlags, LoginRequest, Role};
use shared_ui::{Button, ButtonVariant, Card};

use crate::auth::{login, quick_access, use_abandon_on_unmount, use_auth};
use crate::loader::use_mount_guard;
use crate::routes::Route;
use crate::session::use_session;

/// Login page: credential form plus, when enabled, the quick-access
/// shortcuts into either dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let api: HttpApi = use_context();
    let flags: FeatureFlags = use_context();
    let guard = use_mount_guard();
    use_abandon_on_unmount(auth);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    // Forward a visitor who already holds a session.
    let existing = session.clone();
    use_effect(move || {
        if let Some(current) = existing.store().get() {
            navigator().replace(Route::dashboard(current.role));
        }
    });

    let submit_session = session.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = submit_session.clone();
        let api = api.clone();
        let guard = guard.clone();
        let request = LoginRequest::new(username(), password());
        auth.begin();

        async move {
            let result = login(&api, session.store(), &request).await;
            guard.guarded(|| match result {
                Ok(outcome) => {
                    auth.succeed(outcome.session.role);
                    navigator().push(outcome.destination);
                }
                Err(err) => auth.fail(&err),
            });
        }
    };

    let enter_as = use_callback(move |role: Role| {
        let outcome = quick_access(session.store(), role);
        auth.succeed(role);
        navigator().push(outcome.destination);
    });

    let authenticating = auth.is_authenticating();

    rsx! {
        document::Title { "Login | Flowmondo" }
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                div { class: "brand auth-brand",
                    "Flow"
                    span { "mondo" }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    div { class: "form-group",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            r#type: "text",
                            class: "form-control",
                            placeholder: "Enter username",
                            autocomplete: "username",
                            required: true,
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            class: "form-control",
                            placeholder: "Enter password",
                            autocomplete: "current-password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    Button { block: true, disabled: authenticating,
                        if authenticating { "Signing in..." } else { "Sign In" }
                    }
                }

                if let Some(err) = auth.error() {
                    div { class: "auth-error", role: "alert", "{err}" }
                }

                if flags.quick_access {
                    div { class: "quick-access",
                        p { "Quick Access (Dev Mode):" }
                        div { class: "quick-access-buttons",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| enter_as.call(Role::Admin),
                                "Open Admin Dashboard"
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| enter_as.call(Role::Client),
                                "Open Client Dashboard"
                            }
                        }
                    }
                }
            }
        }
    }
}
