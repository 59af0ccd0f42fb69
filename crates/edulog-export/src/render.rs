use edulog_core::models::view_model::ViewModel;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Minimal worksheet page used when the caller brings no template.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="de">
<head><meta charset="utf-8"><title>{{ title }}</title></head>
<body>
<header>
  <h1>{{ title }}</h1>
  <p>{{ company }}{% if location %}, {{ location }}{% endif %}</p>
  <table>
    <tr><th>Name</th><td>{{ name }}</td><th>Geburtsdatum</th><td>{{ birthdate }}</td></tr>
    <tr><th>Alter</th><td>{{ age }}</td><th>Sprache</th><td>{{ language }}</td></tr>
    <tr><th>Seit</th><td>{{ since }}</td><th>Datum</th><td>{{ date }}</td></tr>
    <tr><th>Pädagoge</th><td>{{ teacher }}</td><th>Punkte</th><td>{{ score }} ({{ min }}–{{ max }})</td></tr>
  </table>
</header>
<section class="scale">
  {% for band in ranges %}<span class="band">{{ band.start }}–{{ band.end }}</span>{% endfor %}
  <p class="legend">{{ label_1 }} · {{ label_2 }} · {{ label_3 }} · {{ label_4 }}</p>
  <p class="assessment">{{ assessment }}</p>
</section>
{% if items %}
<section class="items">
  <table>
  {% for name, color in items %}<tr><td>{{ name }}</td><td style="background: {{ color }}"></td></tr>{% endfor %}
  </table>
</section>
{% endif %}
</body>
</html>
"#;

/// Render a Tera template with a view-model.
///
/// The view-model's flat keys become the template context; `title` is
/// added on top.
pub fn render_page(
    template_name: &str,
    template_content: &str,
    title: &str,
    view_model: &ViewModel,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view_model)?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.insert("title", title);

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "rendered worksheet");
    Ok(rendered)
}

/// Render with the caller's template, or [`DEFAULT_TEMPLATE`] when none is
/// given.
pub fn render_category_page(
    title: &str,
    template: Option<&str>,
    view_model: &ViewModel,
) -> Result<String, ExportError> {
    render_page(
        "worksheet.html",
        template.unwrap_or(DEFAULT_TEMPLATE),
        title,
        view_model,
    )
}
