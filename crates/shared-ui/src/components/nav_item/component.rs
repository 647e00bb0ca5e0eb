use dioxus::prelude::*;

/// Sidebar entry. `active` highlights the entry for the visible tab.
#[component]
pub fn NavItem(
    label: String,
    #[props(default)] active: bool,
    icon: Option<Element>,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let class = if active { "nav-item active" } else { "nav-item" };
    let current = if active { "page" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class,
            role: "button",
            aria_current: current,
            onclick: move |evt| onclick.call(evt),
            if let Some(icon) = icon {
                span { class: "nav-item-icon", {icon} }
            }
            span { class: "nav-item-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_item_is_marked() {
        let html = dioxus_ssr::render_element(rsx! {
            NavItem { label: "Dashboard", active: true, onclick: move |_| {} }
        });
        assert!(html.contains("nav-item active"), "{html}");
        assert!(html.contains(r#"aria-current="page""#));
    }

    #[test]
    fn inactive_item_is_plain() {
        let html = dioxus_ssr::render_element(rsx! {
            NavItem { label: "Settings", onclick: move |_| {} }
        });
        assert!(!html.contains("active"), "{html}");
        assert!(html.contains("Settings"));
    }
}
