use crate::{
    model::{
        category::{Category, find_category},
        event::CalendarEvent,
    },
    scene::primitive::{Primitive, Tooltip},
};

/// Info box for a hovered event.
pub fn tooltip(event: &CalendarEvent, categories: &[Category]) -> Primitive {
    let category = find_category(categories, &event.category_id)
        .map(|c| c.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("Unknown");
    Primitive::Tooltip(Tooltip {
        lines: vec![
            format!("Subject: {}", event.subject),
            format!("Start: {}", event.start.format("%Y-%m-%d")),
            format!("End: {}", event.end.format("%Y-%m-%d")),
            format!("Lane: {}", event.lane),
            format!("Category: {category}"),
        ],
    })
}

#[cfg(test)]
#[path = "../../tests/unit/rings/tooltip.rs"]
mod tests;
