// src/api/assets.rs
use regex::Regex;
use rust_embed::RustEmbed;
use std::sync::LazyLock;

#[derive(RustEmbed)]
#[folder = "static/"]
pub struct StaticAssets;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid"));

/// Loads an embedded page as text.
pub fn page(name: &str) -> Option<String> {
    StaticAssets::get(name).map(|file| String::from_utf8_lossy(&file.data).into_owned())
}

/// Fills `{{key}}` placeholders from `slots`. Values are inserted as given;
/// callers escape anything that did not come out of the renderer.
/// Unknown placeholders are left in place.
pub fn render_template(template: &str, slots: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures| {
            let key = &caps[1];
            slots
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_render() {
        let out = render_template(
            "<p>{{ alert }}</p><ul>{{expressions}}</ul>{{unknown}}",
            &[("alert", "oops"), ("expressions", "<li>1</li>")],
        );
        assert_eq!(out, "<p>oops</p><ul><li>1</li></ul>{{unknown}}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let out = render_template("{{input}}", &[("input", "{{alert}}"), ("alert", "x")]);
        assert_eq!(out, "{{alert}}");
    }

    #[test]
    fn test_pages_are_embedded() {
        let index = page("index.html").unwrap();
        assert!(index.contains("{{expressions}}"));
        let detail = page("expression.html").unwrap();
        assert!(detail.contains("{{details}}"));
    }
}
