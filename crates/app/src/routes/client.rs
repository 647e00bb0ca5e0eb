use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBriefcase, LdFolder, LdLayoutDashboard, LdUsers,
};
use dioxus_free_icons::Icon;
use server::api::HttpApi;
use shared_types::{demo, ClientDashboardData, ClientTab, FeatureFlags, Role};
use shared_ui::{
    Badge, BadgeTone, Button, ButtonVariant, Card, CardHeader, DocItem, NavItem, Timeline,
};

use super::shell::DashboardShell;
use crate::format_helpers::format_balance;
use crate::gate::SessionGate;
use crate::loader::{apply_fallback, load_client};
use crate::payment::{PaymentDialog, PaymentModal};

/// Documents shown on the overview before "View All".
const RECENT_DOCUMENTS: usize = 2;

/// `/client`: gated on a client session.
#[component]
pub fn ClientDashboard() -> Element {
    rsx! {
        document::Title { "Client | Flowmondo" }
        SessionGate { required: Role::Client,
            ClientView {}
        }
    }
}

fn tab_icon(tab: ClientTab) -> Element {
    match tab {
        ClientTab::Overview => {
            rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } }
        }
        ClientTab::Projects => {
            rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } }
        }
        ClientTab::Documents => {
            rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } }
        }
        ClientTab::Support => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
    }
}

#[component]
fn ClientView() -> Element {
    let api: HttpApi = use_context();
    let flags: FeatureFlags = use_context();
    let mut tab = use_signal(ClientTab::default);
    let mut payment = use_signal(PaymentModal::default);
    let mut notice = use_signal(|| Option::<&'static str>::None);

    let data = use_resource(move || {
        let api = api.clone();
        let flags = flags.clone();
        async move { apply_fallback(load_client(&api).await, &flags, demo::client_dashboard) }
    });

    let loaded = data.read().clone();
    let showing_demo = matches!(&loaded, Some(Ok(l)) if l.is_demo());
    let project = match &loaded {
        Some(Ok(l)) => Some(l.data.clone()),
        _ => None,
    };
    let project_name = project
        .as_ref()
        .map(|p| p.project_name.clone())
        .unwrap_or_else(|| "Loading...".to_string());
    let client_name = project
        .as_ref()
        .map(|p| p.client_name.clone())
        .unwrap_or_else(|| "Client".to_string());
    let initial: String = client_name.chars().take(1).collect();

    let body = match loaded {
        Some(Err(err)) => rsx! {
            div { class: "load-error", "Could not load project: {err}" }
        },
        _ => rsx! {
            ClientSection {
                tab: tab(),
                data: project,
                on_select: move |t| tab.set(t),
                on_pay: move |_| payment.write().open(),
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        DashboardShell {
            title: "Project Overview",
            subtitle: rsx! {
                "Project: "
                strong { "{project_name}" }
            },
            demo: showing_demo,
            profile: rsx! {
                div { class: "profile-text",
                    strong { "{client_name}" }
                    span { class: "profile-role", "Client" }
                }
                span { class: "profile-avatar", "{initial}" }
            },
            tabs: rsx! {
                for t in ClientTab::ALL {
                    NavItem {
                        key: "{t.id()}",
                        label: "{t.label()}",
                        active: tab() == t,
                        icon: tab_icon(t),
                        onclick: move |_| tab.set(t),
                    }
                }
            },
            sidebar_extra: rsx! {
                Card { class: "action-needed",
                    div { class: "action-needed-title",
                        Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                        "Action Needed"
                    }
                    p { "Invoice #9902 is pending." }
                    Button { block: true, onclick: move |_| payment.write().open(), "Pay Now" }
                }
            },
            if let Some(message) = notice() {
                div { class: "notice", role: "status",
                    "{message}"
                    button { class: "notice-dismiss", onclick: move |_| notice.set(None), "×" }
                }
            }
            {body}
        }

        PaymentDialog { state: payment, on_ack: move |ack| notice.set(Some(ack)) }
    }
}

/// Content area for one client tab. `data` is `None` until the project has
/// loaded.
#[component]
pub fn ClientSection(
    tab: ClientTab,
    #[props(!optional)] data: Option<ClientDashboardData>,
    on_select: EventHandler<ClientTab>,
    on_pay: EventHandler<()>,
) -> Element {
    let timeline = data.as_ref().map(|d| d.timeline.clone());
    let documents = data.as_ref().map(|d| d.documents.clone()).unwrap_or_default();
    let balance = format_balance(data.as_ref().map(|d| d.balance));

    match tab {
        ClientTab::Overview => rsx! {
            div { class: "overview-grid",
                div { class: "column",
                    div { class: "clickable", onclick: move |_| on_select.call(ClientTab::Projects),
                        Card {
                            CardHeader { title: "Project Progress" }
                            Timeline { entries: timeline }
                        }
                    }
                    Card {
                        CardHeader {
                            title: "Recent Documents",
                            action: rsx! {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| on_select.call(ClientTab::Documents),
                                    "View All"
                                }
                            },
                        }
                        for (i, file) in documents.iter().take(RECENT_DOCUMENTS).enumerate() {
                            DocItem { key: "{i}", file: file.clone() }
                        }
                    }
                }
                div { class: "column",
                    Card { class: "balance-card",
                        p { class: "balance-label", "Outstanding Balance" }
                        h2 { class: "balance-value", "${balance}" }
                        Badge { tone: BadgeTone::Warning, "Due in 3 days" }
                        Button { block: true, onclick: move |_| on_pay.call(()), "Pay Invoice" }
                    }
                    Card {
                        CardHeader { title: "Project Team" }
                        Button {
                            variant: ButtonVariant::Outline,
                            block: true,
                            onclick: move |_| on_select.call(ClientTab::Support),
                            "Contact Team"
                        }
                    }
                }
            }
        },
        ClientTab::Projects => rsx! {
            Card {
                h2 { "Detailed Project Timeline" }
                Timeline { entries: timeline, full: true }
            }
        },
        ClientTab::Documents => rsx! {
            Card {
                h2 { "All Documents" }
                div { class: "document-grid",
                    for (i, file) in documents.iter().enumerate() {
                        DocItem { key: "{i}", file: file.clone() }
                    }
                }
            }
        },
        ClientTab::Support => rsx! {
            Card { class: "support-card",
                h2 { "Support" }
                textarea { class: "support-message", rows: 5, placeholder: "How can we help?" }
                Button { "Send Message" }
            }
        },
    }
}
