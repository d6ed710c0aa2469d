//! Various utility functions: identifiers, URLs, string normalisation

use lazy_regex::{regex, regex_is_match};
use log::debug;
use unicode_normalization::UnicodeNormalization;

use crate::constants::{FRONTMATTER_ID, JOURNAL_VENUES, OLD_JOURNAL_PREFIXES};
use crate::diagnostics::Diagnostics;

#[allow(non_snake_case)]
pub fn NFC(s: &str) -> String {
  s.nfc().collect()
}

/// Drop newlines, collapse runs of spaces and trim
pub fn remove_extra_whitespace(s: &str) -> String {
  let s = s.replace('\n', "");
  regex!(r" +").replace_all(&s, " ").trim().to_string()
}

/// New-style identifiers are year-first: `2020.acl-main.1`
pub fn is_newstyle_id(id: &str) -> bool {
  id.starts_with(|c: char| c.is_ascii_digit())
}

/// Old-style collections whose ids use two digits for the volume and two
/// for the paper: all workshops (W), C69, and D19 from volume 5 on
fn uses_two_digit_scheme(collection_id: &str, volume_id: &str) -> bool {
  collection_id.starts_with('W')
    || collection_id == "C69"
    || (collection_id == "D19" && volume_id.parse::<u32>().map_or(false, |v| v >= 5))
}

fn pad(id: &str, width: usize) -> String {
  match id.parse::<u32>() {
    Ok(n) => format!("{:0width$}", n, width = width),
    Err(_) => id.to_string(),
  }
}

/// Build the canonical identifier of a paper, or of a volume when
/// `paper_id` is `None`:
///
/// ```
/// use anthology::utils::build_anthology_id;
///
/// assert_eq!(build_anthology_id("2020.acl", "main", Some("12")), "2020.acl-main.12");
/// assert_eq!(build_anthology_id("P18", "1", Some("12")), "P18-1012");
/// assert_eq!(build_anthology_id("W18", "5", Some("12")), "W18-0512");
/// assert_eq!(build_anthology_id("W18", "5", None), "W18-05");
/// ```
pub fn build_anthology_id(collection_id: &str, volume_id: &str, paper_id: Option<&str>) -> String {
  if is_newstyle_id(collection_id) {
    return match paper_id {
      Some(paper_id) => format!("{collection_id}-{volume_id}.{paper_id}"),
      None => format!("{collection_id}-{volume_id}"),
    };
  }
  let (volume_width, paper_width) = if uses_two_digit_scheme(collection_id, volume_id) {
    (2, 2)
  } else {
    (1, 3)
  };
  let mut id = format!("{}-{}", collection_id, pad(volume_id, volume_width));
  if let Some(paper_id) = paper_id {
    id.push_str(&pad(paper_id, paper_width));
  }
  id
}

/// Split an identifier into collection, volume and (if present) paper id.
/// Numeric old-style parts lose their padding.
pub fn deconstruct_anthology_id(id: &str) -> Option<(String, String, Option<String>)> {
  let (collection_id, rest) = id.split_once('-')?;
  if is_newstyle_id(collection_id) {
    return Some(match rest.split_once('.') {
      Some((volume_id, paper_id)) => (collection_id.into(), volume_id.into(), Some(paper_id.into())),
      None => (collection_id.into(), rest.into(), None),
    });
  }
  if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
    return None;
  }
  let two_digit = collection_id.starts_with('W')
    || collection_id == "C69"
    || (collection_id == "D19" && rest.starts_with('0'));
  let split = if two_digit { 2 } else { 1 };
  if rest.len() < split {
    return None;
  }
  let unpad = |s: &str| s.trim_start_matches('0').to_string();
  let volume_id = match unpad(&rest[..split]) {
    v if v.is_empty() => "0".to_string(),
    v => v,
  };
  let paper_id = if rest.len() > split {
    match unpad(&rest[split..]) {
      p if p.is_empty() => Some(FRONTMATTER_ID.to_string()),
      p => Some(p),
    }
  } else {
    None
  };
  Some((collection_id.into(), volume_id, paper_id))
}

/// Does an identifier (of a collection, volume or paper) belong to a journal?
pub fn is_journal(id: &str) -> bool {
  if is_newstyle_id(id) {
    let collection = id.split('-').next().unwrap_or(id);
    let venue = collection.rsplit('.').next().unwrap_or(collection);
    JOURNAL_VENUES.contains(venue)
  } else {
    id.starts_with(&OLD_JOURNAL_PREFIXES[..])
  }
}

/// True for identifiers with no paper part
pub fn is_volume_id(id: &str) -> bool {
  matches!(deconstruct_anthology_id(id), Some((_, _, None)))
}

/// Return `name` if it already has a network location, else substitute it
/// into `template`
pub fn infer_url(name: &str, template: &str) -> String {
  if has_authority(name) {
    return name.to_string();
  }
  template.replace("{}", name)
}

/// Does the string carry a network location (`scheme://host/…` or `//host/…`)?
pub fn has_authority(name: &str) -> bool {
  regex_is_match!(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:)?//[^/]", name)
}

/// Expand an attachment file name into its URL. Internal file names must
/// start with the id of the paper owning them; a mismatch is reported but
/// the name is expanded anyway.
pub fn infer_attachment_url(name: &str, parent_id: &str, template: &str, diagnostics: &Diagnostics) -> String {
  if has_authority(name) {
    debug!("Attachment '{}' is external", name);
    return name.to_string();
  }
  if !name.starts_with(parent_id) {
    diagnostics.error(format!(
      "attachment must begin with paper ID '{}', but is '{}'",
      parent_id, name
    ));
  }
  infer_url(name, template)
}
