use dioxus::prelude::*;

/// White panel with a soft border. Every dashboard section sits in one.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Title row of a [`Card`], with an optional trailing action.
#[component]
pub fn CardHeader(title: String, action: Option<Element>) -> Element {
    rsx! {
        div { class: "card-header",
            h3 { class: "card-title", "{title}" }
            if let Some(action) = action {
                div { class: "card-action", {action} }
            }
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
