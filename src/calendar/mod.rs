pub(crate) mod spans;
pub(crate) mod week;
