//! LaTeX handling

pub mod recode;
