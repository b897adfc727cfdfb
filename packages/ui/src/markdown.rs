//! Markdown rendering for dataset descriptions.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

fn render_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Render a Markdown string as HTML.
#[component]
pub fn Markdown(
    #[props(default = "".to_string())] class: String,
    source: String,
) -> Element {
    let rendered = render_html(&source);
    rsx! {
        div {
            class: "markdown {class}",
            dangerous_inner_html: "{rendered}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_html("# Title\n\nSome *emphasis*.");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }
}
