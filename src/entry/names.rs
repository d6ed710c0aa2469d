//! Authorship roles and iteration over the people of a paper

use core::fmt;

use itertools::Itertools;

use crate::entry::fields::{Attributes, Field};
use crate::entry::name::{Person, PersonName};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
  Author,
  Editor,
}

impl Role {
  /// Roles in iteration order
  pub const ALL: [Role; 2] = [Role::Author, Role::Editor];

  pub fn field(self) -> Field {
    match self {
      Self::Author => Field::Author,
      Self::Editor => Field::Editor,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Self::Author => "author",
      Self::Editor => "editor",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Every (name, id, role) of a paper, authors before editors, each in the
/// order given in the data. Calling it again restarts from the beginning.
pub fn iter_people(attrib: &Attributes) -> impl Iterator<Item = (&PersonName, Option<&str>, Role)> + '_ {
  Role::ALL.into_iter().flat_map(move |role| {
    attrib
      .people(&role.field())
      .unwrap_or_default()
      .iter()
      .map(move |p| (&p.name, p.id.as_deref(), role))
  })
}

/// Display list of a people field: full names joined by ", "
pub fn author_string(people: &[Person]) -> String {
  people.iter().map(|p| p.name.full()).join(", ")
}

/// BibTeX list of a people field: escaped "Last, First" names joined by " and "
pub fn bibtex_names(people: &[Person]) -> String {
  people.iter().map(|p| p.name.as_bibtex()).join(" and ")
}
