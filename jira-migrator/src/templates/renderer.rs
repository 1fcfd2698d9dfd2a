//! Template renderer.

use super::generate_browse_link;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Layout of a migrated issue body.
///
/// The leading newline and the trailing indentation are part of the format
/// and must be kept byte for byte.
pub const ISSUE_BODY_TEMPLATE: &str = "\n{{description}}\n[#{{key}}]({{link}})\n        ";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Template renderer for migrated issue bodies.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the body of a migrated issue.
    ///
    /// # Arguments
    ///
    /// * `description` - Plain text extracted from the Jira description
    /// * `key` - Jira issue key
    /// * `host` - Jira host, used verbatim for the back-reference link
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_issue_body(
        &self,
        description: &str,
        key: &str,
        host: &str,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "description": description,
            "key": key,
            "link": generate_browse_link(host, key),
        });

        self.render_template(ISSUE_BODY_TEMPLATE, &data)
    }

    /// Renders a template with the given data.
    fn render_template(
        &self,
        template: &str,
        data: &Value,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
