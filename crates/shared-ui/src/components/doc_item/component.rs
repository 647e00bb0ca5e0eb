use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use shared_types::{DocumentKind, DocumentRecord};

/// One shared file: icon by kind, name, then `size • date`.
#[component]
pub fn DocItem(file: DocumentRecord) -> Element {
    let kind = match file.kind {
        DocumentKind::Pdf => "pdf",
        DocumentKind::Image => "image",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "doc-item", "data-kind": kind,
            span { class: "doc-item-icon",
                Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 }
            }
            div { class: "doc-item-text",
                span { class: "doc-item-name", "{file.name}" }
                span { class: "doc-item-meta", "{file.size} • {file.date}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_and_meta_line() {
        let file = DocumentRecord {
            name: "Project_Proposal_v2.pdf".into(),
            size: "2.4 MB".into(),
            date: "2 days ago".into(),
            kind: DocumentKind::Pdf,
        };
        let html = dioxus_ssr::render_element(rsx! {
            DocItem { file }
        });
        assert!(html.contains("Project_Proposal_v2.pdf"));
        assert!(html.contains("2.4 MB • 2 days ago"));
        assert!(html.contains(r#"data-kind="pdf""#));
    }

    #[test]
    fn image_kind_is_tagged() {
        let file = DocumentRecord {
            name: "Mockup.png".into(),
            size: "5.1 MB".into(),
            date: "5 days ago".into(),
            kind: DocumentKind::Image,
        };
        let html = dioxus_ssr::render_element(rsx! {
            DocItem { file }
        });
        assert!(html.contains(r#"data-kind="image""#));
    }
}
