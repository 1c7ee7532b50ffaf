//! Explicit state repositories for documents and editor lists.

pub(crate) mod json;

use crate::{
    foundation::error::CalwheelResult,
    model::{
        category::{Category, validate_categories},
        document::WheelDocument,
        event::{CalendarEvent, validate_events},
    },
};

/// Values checked before they are persisted and after they are loaded.
pub trait Validate {
    /// Fail with [`CalwheelError::Validation`] when the value is unusable.
    fn validate(&self) -> CalwheelResult<()>;
}

impl Validate for WheelDocument {
    fn validate(&self) -> CalwheelResult<()> {
        WheelDocument::validate(self)
    }
}

impl Validate for Vec<CalendarEvent> {
    fn validate(&self) -> CalwheelResult<()> {
        validate_events(self)
    }
}

impl Validate for Vec<Category> {
    fn validate(&self) -> CalwheelResult<()> {
        validate_categories(self)
    }
}

/// Load/save of one value of type `T`.
pub trait StateRepository<T> {
    /// Read and validate the stored value.
    fn load(&self) -> CalwheelResult<T>;
    /// Validate and store `value`, replacing what was there.
    fn save(&self, value: &T) -> CalwheelResult<()>;
}
