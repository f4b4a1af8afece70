//! HTML template rendering
//!
//! Page templates are Liquid sources compiled into the binary and parsed once
//! at startup. The templates pipe every value through `escape`.

use std::collections::HashMap;
use std::fmt::Debug;

use common::error::{Error, Result};
use common::model::LookupResult;

/// Template for the root page
pub const INDEX_TEMPLATE: &str = "index.html";
/// Template for a named config value
pub const CONFIG_TEMPLATE: &str = "config.html";

/// Named values substituted into a template
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    globals: liquid::Object,
}

impl TemplateContext {
    /// Liquid globals for rendering
    pub fn as_object(&self) -> &liquid::Object {
        &self.globals
    }
}

impl From<&LookupResult> for TemplateContext {
    fn from(result: &LookupResult) -> Self {
        // Absent values render as empty strings
        Self {
            globals: liquid::object!({
                "key": result.key_or_empty(),
                "value": result.value_or_empty(),
            }),
        }
    }
}

/// Renders a named template with a context
pub trait TemplateRenderer: Send + Sync + Debug {
    /// Render `template` or fail when it is unknown or cannot be rendered
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String>;
}

/// Renderer over templates parsed ahead of time
pub struct EmbeddedTemplates {
    templates: HashMap<String, liquid::Template>,
}

impl Debug for EmbeddedTemplates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedTemplates")
            .field("templates", &self.templates.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EmbeddedTemplates {
    /// Renderer with the bundled page templates
    pub fn bundled() -> Result<Self> {
        Self::with_templates([
            (INDEX_TEMPLATE, include_str!("../templates/index.html")),
            (CONFIG_TEMPLATE, include_str!("../templates/config.html")),
        ])
    }

    /// Parse caller supplied `(name, source)` templates
    pub fn with_templates<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| Error::Template(format!("building parser: {}", e)))?;

        let mut templates = HashMap::new();
        for (name, source) in sources {
            let template = parser
                .parse(source)
                .map_err(|e| Error::Template(format!("parsing {}: {}", name, e)))?;
            templates.insert(name.to_string(), template);
        }

        Ok(Self { templates })
    }
}

impl TemplateRenderer for EmbeddedTemplates {
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        self.templates
            .get(template)
            .ok_or_else(|| Error::Template(format!("unknown template {}", template)))?
            .render(context.as_object())
            .map_err(|e| Error::Template(format!("rendering {}: {}", template, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(source: &str) -> EmbeddedTemplates {
        EmbeddedTemplates::with_templates([("t", source)]).unwrap()
    }

    #[test]
    fn test_substitutes_and_escapes() {
        let result = LookupResult::new(Some("K".into()), Some("<b>a & b</b>".into()));
        let html = renderer("{{ key }}={{ value | escape }}")
            .render("t", &TemplateContext::from(&result))
            .unwrap();
        assert_eq!(html, "K=&lt;b&gt;a &amp; b&lt;/b&gt;");
    }

    #[test]
    fn test_absent_values_render_empty() {
        let html = renderer("[{{ key | escape }}|{{ value | escape }}]")
            .render("t", &TemplateContext::from(&LookupResult::empty()))
            .unwrap();
        assert_eq!(html, "[|]");
    }

    #[test]
    fn test_unknown_template() {
        let err = EmbeddedTemplates::bundled()
            .unwrap()
            .render("missing.html", &TemplateContext::default())
            .unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }

    #[test]
    fn test_unclosed_block_fails_to_parse() {
        let err = EmbeddedTemplates::with_templates([("t", "{% if key %}open")]).unwrap_err();
        assert!(matches!(err, Error::Template(ref m) if m.starts_with("parsing t")));
    }

    #[test]
    fn test_bundled_templates_render() {
        let result = LookupResult::new(Some("MAILGUN_SECRET_KEY".into()), Some("abc123".into()));
        let context = TemplateContext::from(&result);
        let templates = EmbeddedTemplates::bundled().unwrap();
        for name in [INDEX_TEMPLATE, CONFIG_TEMPLATE] {
            let html = templates.render(name, &context).unwrap();
            assert!(html.contains("<dt>MAILGUN_SECRET_KEY</dt>"), "{}", name);
            assert!(html.contains("<dd>abc123</dd>"), "{}", name);
        }
    }
}
