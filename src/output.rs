//! Export of finished papers

pub mod bibtex;
pub mod dict;
