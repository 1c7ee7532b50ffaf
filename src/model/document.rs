use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{CalwheelError, CalwheelResult},
    model::{
        category::{Category, default_categories, validate_categories},
        event::{CalendarEvent, validate_events},
        example::example_events,
        locale::Locale,
        palette::Palette,
        range::DateRange,
        style::WheelStyleConfig,
    },
};

/// Everything the external editor hands to the renderer, as one serializable record.
///
/// Missing fields take their defaults so hand-written documents can stay short.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelDocument {
    /// Dates mapped onto one turn.
    pub range: DateRange,
    /// Locale id, see [`Locale::by_id`].
    pub locale: String,
    /// Palette name, see [`Palette::by_name`].
    pub palette: String,
    /// Ring geometry and toggles.
    pub style: WheelStyleConfig,
    /// Color pairs referenced by events.
    pub categories: Vec<Category>,
    /// Events drawn on the event ring.
    pub events: Vec<CalendarEvent>,
}

impl Default for WheelDocument {
    fn default() -> Self {
        Self {
            range: DateRange::default(),
            locale: crate::model::locale::EN_US.id.to_string(),
            palette: crate::model::palette::SPECTRAL.name.to_string(),
            style: WheelStyleConfig::default(),
            categories: default_categories(),
            events: Vec::new(),
        }
    }
}

impl WheelDocument {
    /// A full-year document for `year` seeded with the sample events.
    pub fn example(year: i32) -> CalwheelResult<Self> {
        Ok(Self {
            range: DateRange::year(year)?,
            events: example_events(year)?,
            ..Self::default()
        })
    }

    /// Read and validate a JSON document.
    pub fn from_path(path: impl AsRef<Path>) -> CalwheelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CalwheelError::validation(format!("open wheel document '{}': {e}", path.display()))
        })?;
        let doc: Self = serde_json::from_reader(BufReader::new(f))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Resolved locale; unknown ids resolve to English.
    pub fn locale(&self) -> &'static Locale {
        Locale::by_id(&self.locale).unwrap_or(&crate::model::locale::EN_US)
    }

    /// Resolved palette; unknown names resolve to the default palette.
    pub fn palette(&self) -> &'static Palette {
        Palette::by_name(&self.palette).unwrap_or(&crate::model::palette::SPECTRAL)
    }

    /// Check the range, style, categories and events.
    pub fn validate(&self) -> CalwheelResult<()> {
        self.range.validate()?;
        if Locale::by_id(&self.locale).is_none() {
            return Err(CalwheelError::validation(format!(
                "unknown locale '{}'",
                self.locale
            )));
        }
        if Palette::by_name(&self.palette).is_none() {
            return Err(CalwheelError::validation(format!(
                "unknown palette '{}'",
                self.palette
            )));
        }
        self.style.validate()?;
        validate_categories(&self.categories)?;
        validate_events(&self.events)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/document.rs"]
mod tests;
