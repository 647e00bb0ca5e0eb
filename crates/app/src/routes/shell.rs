use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeTone, NavItem};

use crate::auth::{sign_out, use_auth};
use crate::session::use_session;

/// Sidebar, page header and content area shared by both dashboards.
///
/// `tabs` holds the tab entries; `sidebar_extra` sits between them and the
/// Logout entry.
#[component]
pub fn DashboardShell(
    tabs: Element,
    sidebar_extra: Option<Element>,
    title: String,
    subtitle: Element,
    profile: Element,
    /// Show the "Demo data" badge.
    #[props(default)]
    demo: bool,
    children: Element,
) -> Element {
    let session = use_session();
    let mut auth = use_auth();

    let logout = move |_: MouseEvent| {
        let target = sign_out(session.store());
        auth.reset();
        tracing::info!("signed out");
        navigator().push(target);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }

        div { class: "dashboard-layout",
            aside { class: "sidebar",
                div { class: "brand",
                    "Flow"
                    span { "mondo" }
                }
                nav { class: "sidebar-nav",
                    {tabs}
                    div { class: "sidebar-spacer" }
                    if let Some(extra) = sidebar_extra {
                        {extra}
                    }
                    NavItem {
                        label: "Logout",
                        icon: rsx! { Icon::<LdLock> { icon: LdLock, width: 18, height: 18 } },
                        onclick: logout,
                    }
                }
            }

            main { class: "main-content",
                header { class: "page-header",
                    div {
                        div { class: "page-title-row",
                            h1 { class: "page-title", "{title}" }
                            if demo {
                                Badge { tone: BadgeTone::Warning, "Demo data" }
                            }
                        }
                        p { class: "page-subtitle", {subtitle} }
                    }
                    div { class: "user-profile", {profile} }
                }
                {children}
            }
        }
    }
}
