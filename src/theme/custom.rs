use serde::Serialize;

/// Content type a custom template can be offered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateScope {
    Page,
    Post,
}

/// An author-selectable layout derived from a template's filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomTemplate {
    /// Extension-stripped filename the descriptor was derived from.
    pub filename: String,
    /// Display name shown to theme users.
    pub name: String,
    #[serde(rename = "for")]
    pub scopes: Vec<TemplateScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Derive a descriptor from a catalog name, if it follows one of the
/// custom naming conventions. Names containing a directory separator never
/// qualify.
#[must_use]
pub fn from_catalog_name(catalog_name: &str) -> Option<CustomTemplate> {
    if catalog_name.contains(['/', '\\']) {
        return None;
    }

    if let Some(rest) = non_empty(catalog_name.strip_prefix("custom-")) {
        return Some(CustomTemplate {
            filename: catalog_name.to_string(),
            name: display_name(rest),
            scopes: vec![TemplateScope::Page, TemplateScope::Post],
            slug: None,
        });
    }

    if let Some(rest) = non_empty(catalog_name.strip_prefix("page-")) {
        return Some(CustomTemplate {
            filename: catalog_name.to_string(),
            name: rest.to_string(),
            scopes: vec![TemplateScope::Page],
            slug: Some(rest.to_string()),
        });
    }

    if let Some(rest) = non_empty(catalog_name.strip_prefix("post-")) {
        return Some(CustomTemplate {
            filename: catalog_name.to_string(),
            name: display_name(rest),
            scopes: vec![TemplateScope::Post],
            slug: Some(rest.to_string()),
        });
    }

    None
}

fn non_empty(rest: Option<&str>) -> Option<&str> {
    rest.filter(|r| !r.is_empty())
}

/// Hyphens become spaces; words the author already capitalized are kept
/// verbatim, the rest are title-cased.
fn display_name(rest: &str) -> String {
    rest.split('-')
        .map(|word| {
            if word.chars().any(char::is_uppercase) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
#[path = "custom_tests.rs"]
mod tests;
