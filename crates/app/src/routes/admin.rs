use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdClock, LdFileText, LdLayoutDashboard, LdScale, LdSettings, LdUsers,
};
use dioxus_free_icons::Icon;
use server::api::HttpApi;
use shared_types::{demo, AdminDashboardData, AdminTab, DashboardStats, FeatureFlags, Role};
use shared_ui::{Button, Card, CardContent, CardHeader, ClientTable, NavItem, StatCard};

use super::shell::DashboardShell;
use crate::format_helpers::format_revenue;
use crate::gate::SessionGate;
use crate::loader::{apply_fallback, load_admin};

/// Rows shown in the "Recent Clients" card.
const RECENT_CLIENTS: usize = 5;

/// `/admin`: gated on an admin session.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        document::Title { "Admin | Flowmondo" }
        SessionGate { required: Role::Admin,
            AdminView {}
        }
    }
}

fn tab_icon(tab: AdminTab) -> Element {
    match tab {
        AdminTab::Dashboard => {
            rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } }
        }
        AdminTab::Clients => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        AdminTab::Analytics => {
            rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } }
        }
        AdminTab::Invoices => {
            rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } }
        }
        AdminTab::Settings => {
            rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } }
        }
    }
}

/// Mounted only once the gate admits, so the load below never runs for a
/// visitor without an admin session.
#[component]
fn AdminView() -> Element {
    let api: HttpApi = use_context();
    let flags: FeatureFlags = use_context();
    let mut tab = use_signal(AdminTab::default);

    let data = use_resource(move || {
        let api = api.clone();
        let flags = flags.clone();
        async move { apply_fallback(load_admin(&api).await, &flags, demo::admin_dashboard) }
    });

    let loaded = data.read().clone();
    let showing_demo = matches!(&loaded, Some(Ok(l)) if l.is_demo());

    let body = match loaded {
        Some(Ok(loaded)) => rsx! {
            AdminSection { tab: tab(), data: loaded.data, on_select: move |t| tab.set(t) }
        },
        Some(Err(err)) => rsx! {
            div { class: "load-error", "Could not load dashboard: {err}" }
        },
        None => rsx! {
            AdminSection {
                tab: tab(),
                data: AdminDashboardData {
                    stats: DashboardStats::default(),
                    clients: Vec::new(),
                },
                on_select: move |t| tab.set(t),
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        DashboardShell {
            title: "Admin Overview",
            subtitle: rsx! { "Welcome back, Administrator" },
            demo: showing_demo,
            profile: rsx! {
                Button { variant: shared_ui::ButtonVariant::Ghost,
                    Icon::<LdBell> { icon: LdBell, width: 22, height: 22 }
                }
                span { class: "profile-avatar", "A" }
            },
            tabs: rsx! {
                for t in AdminTab::ALL {
                    NavItem {
                        key: "{t.id()}",
                        label: "{t.label()}",
                        active: tab() == t,
                        icon: tab_icon(t),
                        onclick: move |_| tab.set(t),
                    }
                }
            },
            {body}
        }
    }
}

/// Content area for one admin tab. Output depends only on the props, so
/// returning to a tab re-renders it exactly.
#[component]
pub fn AdminSection(
    tab: AdminTab,
    data: AdminDashboardData,
    on_select: EventHandler<AdminTab>,
) -> Element {
    match tab {
        AdminTab::Dashboard => rsx! {
            section { class: "stats-grid",
                StatCard {
                    label: "Total Clients",
                    value: data.stats.clients.to_string(),
                    caption: "12% vs last month",
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                    onclick: move |_| on_select.call(AdminTab::Clients),
                }
                StatCard {
                    label: "Monthly Revenue",
                    value: format_revenue(data.stats.revenue),
                    caption: "8% vs last month",
                    icon: rsx! { Icon::<LdScale> { icon: LdScale, width: 20, height: 20 } },
                    onclick: move |_| on_select.call(AdminTab::Analytics),
                }
                StatCard {
                    label: "Pending Projects",
                    value: data.stats.pending.to_string(),
                    caption: "Requires attention",
                    icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 20, height: 20 } },
                    onclick: move |_| on_select.call(AdminTab::Clients),
                }
            }
            div { class: "overview-grid",
                Card {
                    CardHeader {
                        title: "Recent Clients",
                        action: rsx! {
                            Button { onclick: move |_| on_select.call(AdminTab::Clients), "View All" }
                        },
                    }
                    ClientTable { clients: data.clients.clone(), limit: RECENT_CLIENTS }
                }
                div { class: "clickable", onclick: move |_| on_select.call(AdminTab::Analytics),
                    Card {
                        CardHeader { title: "Revenue Trend" }
                        div { class: "trend-chart",
                            for (i, height) in demo::REVENUE_TREND.iter().enumerate() {
                                div { key: "{i}", class: "trend-bar",
                                    div { class: "trend-fill", style: "height: {height}%" }
                                }
                            }
                        }
                    }
                }
            }
        },
        AdminTab::Clients => rsx! {
            Card {
                CardHeader {
                    title: "Client Database",
                    action: rsx! { Button { "Add Client" } },
                }
                ClientTable { clients: data.clients.clone() }
            }
        },
        AdminTab::Analytics => rsx! {
            Card { class: "placeholder-section",
                h2 { "Analytics Dashboard" }
                CardContent { p { "Charts would go here." } }
            }
        },
        AdminTab::Invoices => rsx! {
            Card { class: "placeholder-section",
                h2 { "Invoices" }
                CardContent { p { "Invoice list would go here." } }
            }
        },
        AdminTab::Settings => rsx! {
            Card { class: "placeholder-section",
                h2 { "System Settings" }
                CardContent { p { "Configuration form." } }
            }
        },
    }
}
