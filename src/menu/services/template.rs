//! Message templates rendered with `minijinja`.

use minijinja::Environment;
use serde::Serialize;
use serde_json::{Map, Value};

/// Renders a template string against a serialisable context.
///
/// # Errors
///
/// Returns [`minijinja::Error`] when the template does not parse or
/// references a filter that does not exist.
pub fn render_text(template: &str, context: impl Serialize) -> Result<String, minijinja::Error> {
    Environment::new().render_str(template, context)
}

/// Renders a page footer. `page` is one-based; an unknown page count is
/// shown as `?`.
///
/// Falls back to `Page N/M` when the template fails.
#[must_use]
pub fn render_footer(template: &str, page: usize, pages: Option<usize>) -> String {
    let mut context = Map::new();
    context.insert("page".to_owned(), Value::from(page));
    context.insert(
        "pages".to_owned(),
        pages.map_or_else(|| Value::from("?"), Value::from),
    );
    render_text(template, &context).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "footer template failed to render");
        let total = pages.map_or_else(|| "?".to_owned(), |count| count.to_string());
        format!("Page {page}/{total}")
    })
}
