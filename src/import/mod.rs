pub(crate) mod ics;
