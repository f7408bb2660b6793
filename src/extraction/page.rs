// src/extraction/page.rs
//! Projections over the rendered job page: the visible-text view fed to the
//! model, and the external application link heuristic.

use scraper::{ElementRef, Html, Node, Selector};

const SKIPPED_TAGS: [&str; 3] = ["script", "style", "noscript"];

/// Collect the text content of the document as a user would perceive it:
/// every visible text node, trimmed, joined by newlines. Script, style and
/// noscript subtrees are excluded.
pub fn visible_text(document: &Html) -> String {
    let mut lines = Vec::new();
    collect_visible_text(document.root_element(), &mut lines);
    lines.join("\n")
}

fn collect_visible_text(element: ElementRef<'_>, out: &mut Vec<String>) {
    if SKIPPED_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_visible_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

/// Best-effort recovery of an external application URL: the first button
/// whose text contains "Apply" (case-sensitive), resolved to the href of its
/// nearest enclosing anchor. Returns empty string when there is no such
/// button, no enclosing anchor, or no href — LinkedIn's DOM is not under our
/// control, so this stays a heuristic.
pub fn external_application_link(document: &Html) -> String {
    let button_selector = match Selector::parse("button") {
        Ok(selector) => selector,
        Err(_) => return String::new(),
    };

    for button in document.select(&button_selector) {
        let text = button.text().collect::<Vec<_>>().join(" ");
        if !text.contains("Apply") {
            continue;
        }

        let mut ancestor = button.parent();
        while let Some(node) = ancestor {
            if let Some(element) = ElementRef::wrap(node) {
                if element.value().name() == "a" {
                    return element.value().attr("href").unwrap_or("").to_string();
                }
            }
            ancestor = node.parent();
        }

        // First matching button decides the outcome, anchored or not.
        return String::new();
    }

    String::new()
}
