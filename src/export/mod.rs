//! File-ready outputs of a rendered wheel.

pub(crate) mod raster;
pub(crate) mod svg;
