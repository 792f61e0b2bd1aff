//! Tera-backed [`Renderer`].

use std::collections::HashMap;

use serde_json::Value;
use tera::Tera;

use crate::context::to_tera_context;
use crate::engine::{EngineKind, Renderer};
use crate::error::RenderError;
use crate::helpers::TEXT_HELPERS;

/// Renders one-off template strings with Tera.
///
/// Helpers are registered once on a prototype instance. Every call renders on
/// a clone of it, so no compiled template outlives the call.
#[derive(Clone)]
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    pub fn new() -> Self {
        let mut tera = Tera::default();
        for (name, helper) in TEXT_HELPERS {
            let (name, helper) = (*name, *helper);
            tera.register_filter(
                name,
                move |value: &Value, _args: &HashMap<String, Value>| -> tera::Result<Value> {
                    let s = value
                        .as_str()
                        .ok_or_else(|| tera::Error::msg(format!("{name} filter expects a string")))?;
                    Ok(Value::String(helper(s)))
                },
            );
        }
        TeraRenderer { tera }
    }
}

impl Default for TeraRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TeraRenderer {
    fn kind(&self) -> EngineKind {
        EngineKind::Tera
    }

    fn render_string(&self, template: &str, data: &Value) -> Result<String, RenderError> {
        let ctx = to_tera_context(data)?;
        let mut tera = self.tera.clone();
        Ok(tera.render_str(template, &ctx)?)
    }
}
