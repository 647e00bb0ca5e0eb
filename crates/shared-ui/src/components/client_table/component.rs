use dioxus::prelude::*;
use shared_types::ClientRecord;

use crate::StatusBadge;

/// Roster table. With `limit`, only the first `limit` rows are shown.
#[component]
pub fn ClientTable(clients: Vec<ClientRecord>, limit: Option<usize>) -> Element {
    let shown = limit.unwrap_or(clients.len()).min(clients.len());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "client-table-wrap",
            table { class: "client-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Project" }
                        th { "Status" }
                        th { "Budget" }
                    }
                }
                tbody {
                    // names need not be unique
                    for (i, client) in clients.iter().take(shown).enumerate() {
                        tr { key: "{i}",
                            td {
                                div { class: "client-name",
                                    span { class: "client-avatar", "{client.avatar_letter()}" }
                                    "{client.name}"
                                }
                            }
                            td { "{client.project}" }
                            td { StatusBadge { status: client.status } }
                            td { "{client.budget}" }
                        }
                    }
                }
            }
            if clients.is_empty() {
                p { class: "client-table-empty", "No clients yet." }
            }
        }
    }
}
