//! Structured text fields and their renderings
//!
//! Titles, abstracts and booktitles keep their inline markup as a small XML
//! tree. A [`Formatter`] turns such a tree into one of the output forms of
//! [`Form`]:
//!
//! ```
//! use anthology::{Form, Formatter, MarkupFormatter, TextNode};
//!
//! let title = TextNode::parse("<title>Fine-tuning <fixed-case>BERT</fixed-case></title>").unwrap();
//! let fmt = MarkupFormatter;
//! assert_eq!(fmt.render(Some(&title), Form::Plain, false), "Fine-tuning BERT");
//! assert_eq!(fmt.render(Some(&title), Form::Latex, false), "Fine-tuning {BERT}");
//! ```

use xmltree::{Element, XMLNode};

use crate::element_builder::from_roxmltree;
use crate::latex::recode::{convert_quotes, latex_encode};
use crate::utils::remove_extra_whitespace;
use crate::Form;

/// A text field with inline markup. The root tag names the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode(Element);

impl TextNode {
  pub fn new(element: Element) -> Self {
    Self(element)
  }

  /// Node holding plain text only
  pub fn from_text(tag: &str, text: &str) -> Self {
    let mut element = Element::new(tag);
    element.children.push(XMLNode::Text(text.into()));
    Self(element)
  }

  /// Parse a standalone fragment such as `<title>A <i>b</i></title>`
  pub fn parse(xml: &str) -> Result<Self, roxmltree::Error> {
    let doc = roxmltree::Document::parse(xml)?;
    Ok(Self(from_roxmltree(doc.root_element())))
  }

  pub fn tag(&self) -> &str {
    &self.0.name
  }

  pub fn set_tag(&mut self, tag: &str) {
    self.0.name = tag.into();
  }

  pub fn element(&self) -> &Element {
    &self.0
  }

  pub fn children(&self) -> &[XMLNode] {
    &self.0.children
  }
}

/// Renders structured text, one method per output form
pub trait Formatter: Send + Sync {
  /// Inline markup unchanged
  fn as_xml(&self, node: &TextNode) -> String;

  /// Text content only
  fn as_text(&self, node: &TextNode) -> String;

  fn as_html(&self, node: &TextNode, allow_url: bool) -> String;

  /// LaTeX commands, text escaped for BibTeX
  fn as_latex(&self, node: &TextNode, allow_url: bool) -> String;

  /// Render in the given form. An absent node renders as "".
  fn render(&self, node: Option<&TextNode>, form: Form, allow_url: bool) -> String {
    match node {
      None => String::new(),
      Some(node) => match form {
        Form::Xml => self.as_xml(node),
        Form::Plain => self.as_text(node),
        Form::Html => self.as_html(node, allow_url),
        Form::Latex => self.as_latex(node, allow_url),
      },
    }
  }
}

/// Formatter for the Anthology inline markup: `fixed-case`, `b`, `i`,
/// `tex-math` and `url`
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupFormatter;

impl Formatter for MarkupFormatter {
  fn as_xml(&self, node: &TextNode) -> String {
    let mut out = String::new();
    for child in node.children() {
      write_xml(child, &mut out);
    }
    out
  }

  fn as_text(&self, node: &TextNode) -> String {
    let mut out = String::new();
    for child in node.children() {
      collect_text(child, &mut out);
    }
    remove_extra_whitespace(&out)
  }

  fn as_html(&self, node: &TextNode, allow_url: bool) -> String {
    let mut out = String::new();
    for child in node.children() {
      write_html(child, allow_url, &mut out);
    }
    remove_extra_whitespace(&out)
  }

  fn as_latex(&self, node: &TextNode, allow_url: bool) -> String {
    let mut out = String::new();
    for child in node.children() {
      write_latex(child, allow_url, &mut out);
    }
    remove_extra_whitespace(&convert_quotes(&out))
  }
}

fn text_of(element: &Element) -> String {
  let mut out = String::new();
  for child in &element.children {
    collect_text(child, &mut out);
  }
  out
}

fn collect_text(node: &XMLNode, out: &mut String) {
  match node {
    XMLNode::Text(text) | XMLNode::CData(text) => out.push_str(text),
    XMLNode::Element(element) => {
      for child in &element.children {
        collect_text(child, out);
      }
    }
    _ => {}
  }
}

fn escape_xml(s: &str) -> String {
  s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_html(s: &str) -> String {
  escape_xml(s).replace('"', "&quot;")
}

fn write_xml(node: &XMLNode, out: &mut String) {
  match node {
    XMLNode::Text(text) | XMLNode::CData(text) => out.push_str(&escape_xml(text)),
    XMLNode::Element(element) => {
      out.push('<');
      out.push_str(&element.name);
      for (name, value) in &element.attributes {
        out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
      }
      if element.children.is_empty() {
        out.push_str("/>");
        return;
      }
      out.push('>');
      for child in &element.children {
        write_xml(child, out);
      }
      out.push_str(&format!("</{}>", element.name));
    }
    _ => {}
  }
}

fn write_html(node: &XMLNode, allow_url: bool, out: &mut String) {
  let element = match node {
    XMLNode::Text(text) | XMLNode::CData(text) => {
      out.push_str(&escape_html(text));
      return;
    }
    XMLNode::Element(element) => element,
    _ => return,
  };
  let (open, close) = match element.name.as_str() {
    "fixed-case" => ("<span class=\"acl-fixed-case\">", "</span>"),
    "b" => ("<b>", "</b>"),
    "i" => ("<i>", "</i>"),
    "tex-math" => {
      out.push_str(&format!("<span class=\"tex-math\">{}</span>", escape_html(&text_of(element))));
      return;
    }
    "url" => {
      let url = escape_html(&text_of(element));
      if allow_url {
        out.push_str(&format!("<a href=\"{url}\">{url}</a>"));
      } else {
        out.push_str(&url);
      }
      return;
    }
    _ => ("", ""),
  };
  out.push_str(open);
  for child in &element.children {
    write_html(child, allow_url, out);
  }
  out.push_str(close);
}

fn write_latex(node: &XMLNode, allow_url: bool, out: &mut String) {
  let element = match node {
    XMLNode::Text(text) | XMLNode::CData(text) => {
      out.push_str(&latex_encode(text));
      return;
    }
    XMLNode::Element(element) => element,
    _ => return,
  };
  let (open, close) = match element.name.as_str() {
    "fixed-case" => ("{", "}"),
    "b" => ("\\textbf{", "}"),
    "i" => ("\\textit{", "}"),
    "tex-math" => {
      out.push_str(&format!("${}$", text_of(element)));
      return;
    }
    "url" => {
      let url = text_of(element);
      if allow_url {
        out.push_str(&format!("\\url{{{url}}}"));
      } else {
        out.push_str(&latex_encode(&url));
      }
      return;
    }
    _ => ("", ""),
  };
  out.push_str(open);
  for child in &element.children {
    write_latex(child, allow_url, out);
  }
  out.push_str(close);
}
