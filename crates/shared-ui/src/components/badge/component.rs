use dioxus::prelude::*;
use shared_types::ClientStatus;

/// Colour of a pill label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
        }
    }
}

/// Small pill for inline labels.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Project status pill. Active projects read as healthy; the rest warn.
#[component]
pub fn StatusBadge(status: ClientStatus) -> Element {
    let tone = if status.is_healthy() {
        BadgeTone::Success
    } else {
        BadgeTone::Warning
    };

    rsx! {
        Badge { tone, "{status.as_str()}" }
    }
}
