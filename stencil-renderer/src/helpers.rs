//! Text helpers shared by every engine.
//!
//! Each helper is a plain `&str -> String` function; the engines wrap them as
//! Tera filters or Handlebars helpers under the names in [`TEXT_HELPERS`].

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};

/// A named text transformation.
pub type TextHelper = fn(&str) -> String;

/// Every helper registered in both engines, by template-facing name.
pub const TEXT_HELPERS: &[(&str, TextHelper)] = &[
    ("snake_case", snake_case),
    ("camel_case", camel_case),
    ("pascal_case", pascal_case),
    ("kebab_case", kebab_case),
    ("upper_case", upper_case),
    ("lower_case", lower_case),
    ("capitalize", capitalize),
];

pub fn snake_case(s: &str) -> String {
    s.to_snake_case()
}

pub fn camel_case(s: &str) -> String {
    s.to_lower_camel_case()
}

pub fn pascal_case(s: &str) -> String {
    s.to_pascal_case()
}

pub fn kebab_case(s: &str) -> String {
    s.to_kebab_case()
}

pub fn upper_case(s: &str) -> String {
    s.to_uppercase()
}

pub fn lower_case(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
