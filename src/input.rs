//! Readers for Anthology data sources

pub mod xml;
