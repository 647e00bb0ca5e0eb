use dioxus::prelude::*;

/// Headline metric. Clicking it usually switches to the tab that explains it.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    /// Small caption under the value, e.g. a month-over-month change.
    #[props(default)]
    caption: String,
    icon: Option<Element>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let class = if onclick.is_some() {
        "stat-card clickable"
    } else {
        "stat-card"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            div { class: "stat-card-head",
                span { class: "stat-label", "{label}" }
                if let Some(icon) = icon {
                    {icon}
                }
            }
            div { class: "stat-value", "{value}" }
            if !caption.is_empty() {
                div { class: "stat-caption", "{caption}" }
            }
        }
    }
}
