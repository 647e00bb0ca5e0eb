use dioxus::prelude::*;

/// Full-screen backdrop with a centred card. Clicking the backdrop calls
/// `on_close`; clicks inside the card do not.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-backdrop",
            role: "presentation",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { class: "modal-title", "{title}" }
                {children}
            }
        }
    }
}
