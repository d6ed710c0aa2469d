//! Non-fatal problems found while building a record
//!
//! Each message is logged as it is recorded and also kept, so a caller can
//! inspect what went wrong with a particular paper after the fact.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{error, warn, Level};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
  pub level: Level,
  pub message: String,
}

#[derive(Debug, Default)]
pub struct Diagnostics(Mutex<Vec<Diagnostic>>);

impl Diagnostics {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
    self.0.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn warn(&self, message: impl Into<String>) {
    let message = message.into();
    warn!("{}", message);
    self.lock().push(Diagnostic { level: Level::Warn, message });
  }

  pub fn error(&self, message: impl Into<String>) {
    let message = message.into();
    error!("{}", message);
    self.lock().push(Diagnostic { level: Level::Error, message });
  }

  /// Everything recorded so far, oldest first
  pub fn all(&self) -> Vec<Diagnostic> {
    self.lock().clone()
  }

  pub fn warnings(&self) -> Vec<Diagnostic> {
    self.at_level(Level::Warn)
  }

  pub fn errors(&self) -> Vec<Diagnostic> {
    self.at_level(Level::Error)
  }

  fn at_level(&self, level: Level) -> Vec<Diagnostic> {
    self.lock().iter().filter(|d| d.level == level).cloned().collect()
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }
}
