use egui_code_editor::Syntax;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use url::Url;

/// Las descripciones del banco vienen en HTML; se pintan como Markdown
pub fn html_to_markdown(html: &str) -> String {
    normalize_markdown(&html2md::parse_html(html))
}

/// Texto plano de un Markdown (resumen de las tarjetas del listado)
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::Start(Tag::Item) => out.push_str(" • "),
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::Heading(_))
            | Event::SoftBreak
            | Event::HardBreak => out.push(' '),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_markdown(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n");
    let mut lines: Vec<&str> = Vec::new();
    let mut blank = false;
    for line in normalized.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if blank || lines.is_empty() {
                continue;
            }
            blank = true;
        } else {
            blank = false;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Resaltado para JavaScript / TypeScript (+JSX)
pub fn js_syntax() -> Syntax {
    Syntax::new("javascript")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "const", "let", "var", "function", "return", "if", "else", "for", "while", "do",
            "break", "continue", "switch", "case", "default", "new", "this", "class", "extends",
            "import", "export", "from", "async", "await", "try", "catch", "finally", "throw",
            "typeof", "instanceof", "of", "in", "interface", "type",
        ])
        .with_types([
            "string", "number", "boolean", "void", "any", "null", "undefined", "true", "false",
            "React",
        ])
}

/// URL de búsqueda en Google para la pestaña de referencia.
/// `None` si la consulta está vacía.
pub fn reference_search_url(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Url::parse_with_params("https://www.google.com/search", &[("q", query)])
        .ok()
        .map(String::from)
}
