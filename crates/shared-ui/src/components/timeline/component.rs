use dioxus::prelude::*;
use shared_types::TimelineEntry;

/// Project milestones as a vertical track. `None` means the data has not
/// arrived yet.
#[component]
pub fn Timeline(
    #[props(!optional)] entries: Option<Vec<TimelineEntry>>,
    #[props(default)] full: bool,
) -> Element {
    let Some(entries) = entries else {
        return rsx! {
            div { class: "timeline-loading", "Loading..." }
        };
    };

    let class = if full { "timeline full" } else { "timeline" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ol { class,
            for (i, entry) in entries.iter().enumerate() {
                li {
                    key: "{i}",
                    class: "timeline-item",
                    "data-status": entry.status.as_str(),
                    span { class: "timeline-dot" }
                    h4 { "{entry.title}" }
                    p { class: "timeline-date", "{entry.date}" }
                }
            }
        }
    }
}
