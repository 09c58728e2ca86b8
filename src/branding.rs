//! Theme colours and fonts rendered as CSS custom properties.

use crate::models::newsroom::ThemeSettings;

const FONT_VARIABLES: [&str; 2] = ["--prezly-font-family", "--prezly-font-family-secondary"];

pub fn css_variables(theme: &ThemeSettings) -> Vec<(&'static str, String)> {
    vec![
        ("--prezly-accent-color", theme.accent_color.clone()),
        ("--prezly-header-background-color", theme.header_background_color.clone()),
        ("--prezly-header-link-color", theme.header_link_color.clone()),
        ("--prezly-font-family", font_family(&theme.font)),
        ("--prezly-font-family-secondary", font_family(&theme.font)),
    ]
}

/// `:root { ... }` block. Font variables always end with the brand font and
/// a generic family.
pub fn render_css(variables: &[(&str, String)], brand_font: Option<&str>) -> String {
    let declarations: Vec<String> = variables
        .iter()
        .map(|(name, value)| {
            if FONT_VARIABLES.contains(name) {
                let mut families = vec![value.clone()];
                families.extend(brand_font.map(quote_family));
                families.push("sans-serif".to_string());
                format!("{name}: {}", families.join(", "))
            } else {
                format!("{name}: {value}")
            }
        })
        .collect();

    format!(":root {{ {} }}", declarations.join(";\n"))
}

fn font_family(font: &str) -> String {
    quote_family(font.trim())
}

fn quote_family(name: &str) -> String {
    if name.contains(' ') && !name.starts_with(['\'', '"']) {
        format!("'{name}'")
    } else {
        name.to_string()
    }
}
