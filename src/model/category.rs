use std::collections::HashSet;

use crate::{
    foundation::error::{CalwheelError, CalwheelResult},
    model::event::{CalendarEvent, new_uid},
};

/// Fill used for events whose category cannot be resolved.
pub const DEFAULT_EVENT_FILL: &str = "#f5f6fa";
/// Label color used for events whose category cannot be resolved.
pub const DEFAULT_EVENT_FONT: &str = "#000000";

/// A named color pair referenced by events.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Stable identifier referenced by `CalendarEvent::category_id`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hex fill color.
    pub color: String,
    /// Hex label color.
    pub font_color: String,
}

/// Colors an event is drawn with after category lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedColors<'a> {
    /// Wedge fill.
    pub fill: &'a str,
    /// Label color.
    pub font: &'a str,
}

/// Category with the given id, if any.
pub fn find_category<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.id == id)
}

/// Resolve an event's colors; missing categories and empty colors fall back to defaults.
pub fn resolve_colors<'a>(categories: &'a [Category], event: &CalendarEvent) -> ResolvedColors<'a> {
    let category = find_category(categories, &event.category_id);
    ResolvedColors {
        fill: category
            .map(|c| c.color.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_EVENT_FILL),
        font: category
            .map(|c| c.font_color.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_EVENT_FONT),
    }
}

/// The four seasonal categories a fresh document starts with.
pub fn default_categories() -> Vec<Category> {
    [
        ("winter", "Winter", "#add8e6"),
        ("spring", "Spring", "#90ee90"),
        ("summer", "Summer", "#ffffe0"),
        ("fall", "Fall", "#ffdab9"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        font_color: DEFAULT_EVENT_FONT.to_string(),
    })
    .collect()
}

/// Append an unnamed white category and return its id.
pub fn new_category(categories: &mut Vec<Category>) -> String {
    let id = new_uid();
    categories.push(Category {
        id: id.clone(),
        name: String::new(),
        color: "#ffffff".to_string(),
        font_color: DEFAULT_EVENT_FONT.to_string(),
    });
    id
}

/// Remove a category. Events referencing it are left dangling.
pub fn remove_category(categories: &mut Vec<Category>, id: &str) -> bool {
    let before = categories.len();
    categories.retain(|c| c.id != id);
    categories.len() != before
}

pub(crate) fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

pub(crate) fn validate_categories(categories: &[Category]) -> CalwheelResult<()> {
    let mut seen = HashSet::new();
    for c in categories {
        if c.id.trim().is_empty() {
            return Err(CalwheelError::validation("category id must be non-empty"));
        }
        if !seen.insert(c.id.as_str()) {
            return Err(CalwheelError::validation(format!(
                "duplicate category id '{}'",
                c.id
            )));
        }
        for (field, value) in [("color", &c.color), ("fontColor", &c.font_color)] {
            if !is_hex_color(value) {
                return Err(CalwheelError::validation(format!(
                    "category '{}' {field} must be #rgb or #rrggbb, got '{value}'",
                    c.id
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/model/category.rs"]
mod tests;
