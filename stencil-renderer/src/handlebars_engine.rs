//! Handlebars-backed [`Renderer`].

use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;

use crate::engine::{EngineKind, Renderer};
use crate::error::RenderError;
use crate::helpers;

handlebars_helper!(snake_case: |s: str| helpers::snake_case(s));
handlebars_helper!(camel_case: |s: str| helpers::camel_case(s));
handlebars_helper!(pascal_case: |s: str| helpers::pascal_case(s));
handlebars_helper!(kebab_case: |s: str| helpers::kebab_case(s));
handlebars_helper!(upper_case: |s: str| helpers::upper_case(s));
handlebars_helper!(lower_case: |s: str| helpers::lower_case(s));
handlebars_helper!(capitalize: |s: str| helpers::capitalize(s));

/// Renders one-off template strings with Handlebars.
///
/// Output is not HTML-escaped: generated files are source code, not markup.
/// Strict mode is on, so an undefined variable fails the render as it does in
/// Tera.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        registry.register_helper("snake_case", Box::new(snake_case));
        registry.register_helper("camel_case", Box::new(camel_case));
        registry.register_helper("pascal_case", Box::new(pascal_case));
        registry.register_helper("kebab_case", Box::new(kebab_case));
        registry.register_helper("upper_case", Box::new(upper_case));
        registry.register_helper("lower_case", Box::new(lower_case));
        registry.register_helper("capitalize", Box::new(capitalize));
        HandlebarsRenderer { registry }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HandlebarsRenderer {
    fn kind(&self) -> EngineKind {
        EngineKind::Handlebars
    }

    fn render_string(&self, template: &str, data: &Value) -> Result<String, RenderError> {
        Ok(self.registry.render_template(template, data)?)
    }
}
