use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, ModalOverlay};

/// Methods offered in the payment dialog. Choosing one has no effect.
pub const PAYMENT_METHODS: [&str; 3] = ["UPI", "Card", "Net Banking"];

/// Acknowledgement shown after "Proceed".
pub const PAYMENT_ACK: &str = "Paid!";

/// Visibility of the payment dialog. Nothing here touches the balance;
/// confirming only acknowledges and closes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaymentModal {
    open: bool,
}

impl PaymentModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn cancel(&mut self) {
        self.open = false;
    }

    pub fn confirm(&mut self) -> &'static str {
        self.open = false;
        PAYMENT_ACK
    }
}

/// The dialog itself, rendered while `state` is open. `on_ack` receives the
/// acknowledgement text after "Proceed".
#[component]
pub fn PaymentDialog(state: Signal<PaymentModal>, on_ack: EventHandler<&'static str>) -> Element {
    let mut state = state;
    if !state.read().is_open() {
        return rsx! {};
    }

    rsx! {
        ModalOverlay {
            title: "Select Payment",
            on_close: move |_| state.write().cancel(),
            div { class: "payment-methods",
                for method in PAYMENT_METHODS {
                    div { key: "{method}", class: "payment-method", "{method}" }
                }
            }
            Button {
                block: true,
                onclick: move |_| {
                    let ack = state.write().confirm();
                    on_ack.call(ack);
                },
                "Proceed"
            }
            Button {
                variant: ButtonVariant::Outline,
                block: true,
                onclick: move |_| state.write().cancel(),
                "Cancel"
            }
        }
    }
}
