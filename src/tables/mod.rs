//! Compiled-in trained frequency tables, one module per language.

pub(crate) mod english;
pub(crate) mod russian;
