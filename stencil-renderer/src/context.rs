//! Data → engine context conversion.

use serde_json::Value;

use crate::error::RenderError;

/// Key under which a non-object data value is exposed to templates.
pub const THIS_KEY: &str = "this";

/// Convert caller data to a [`tera::Context`].
///
/// Objects become the context directly. Anything else (a string record, a
/// number) is reachable as `{{ this }}`.
pub fn to_tera_context(data: &Value) -> Result<tera::Context, RenderError> {
    match data {
        Value::Object(_) => tera::Context::from_serialize(data).map_err(RenderError::from),
        other => {
            let mut ctx = tera::Context::new();
            ctx.insert(THIS_KEY, other);
            Ok(ctx)
        }
    }
}
