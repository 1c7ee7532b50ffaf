pub(crate) mod category;
pub(crate) mod document;
pub(crate) mod event;
pub(crate) mod example;
pub(crate) mod locale;
pub(crate) mod palette;
pub(crate) mod range;
pub(crate) mod style;
