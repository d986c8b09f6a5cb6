// HTML writer for pages - pure string building, no I/O.
// Output must stay deterministic: equal pages give byte-identical documents.

use std::borrow::Cow;

use super::page::{Element, Page};

pub const STYLESHEET_HREF: &str = "/static/style.css";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn render_element(element: &Element) -> String {
    match element {
        Element::Title(text) => format!("<h1>{}</h1>\n", escape(text)),
        Element::Paragraph(text) => format!("<p>{}</p>\n", escape(text)),
        Element::Info(text) => format!(
            "<div class=\"alert alert-info\" role=\"status\">{}</div>\n",
            escape(text)
        ),
    }
}

/// Renders a complete HTML5 document for the page.
pub fn to_html(page: &Page) -> String {
    let layout = page.config.layout.as_str();
    let mut out = String::with_capacity(1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<meta name=\"layout\" content=\"{}\">\n", layout));
    out.push_str(&format!("<title>{}</title>\n", escape(&page.config.title)));
    out.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n",
        STYLESHEET_HREF
    ));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!(
        "<main class=\"block-container layout-{0}\" data-layout=\"{0}\">\n",
        layout
    ));

    for element in &page.elements {
        out.push_str(&render_element(element));
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}
