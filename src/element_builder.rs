//! Construction of owned markup trees for structured text fields

use xmltree::{Element, XMLNode};

use crate::formatter::TextNode;

pub trait Builder {
  fn builder(name: &str) -> ElementBuilder;
}

impl Builder for Element {
  fn builder(name: &str) -> ElementBuilder {
    ElementBuilder(Element::new(name))
  }
}

/// Fluent construction of an inline markup tree:
///
/// ```
/// use anthology::element_builder::{Builder, ElementBuilder};
/// use xmltree::Element;
///
/// let title = Element::builder("title")
///   .text("Parsing with ")
///   .append(Element::builder("fixed-case").text("CCG"))
///   .into_text_node();
/// assert_eq!(title.tag(), "title");
/// ```
pub struct ElementBuilder(Element);

impl ElementBuilder {
  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.0.children.push(XMLNode::Text(text.into()));
    self
  }

  /// Sets an attribute.
  pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> ElementBuilder {
    self.0.attributes.insert(name.into(), value.into());
    self
  }

  /// Appends anything implementing `Into<XMLNode>` into the tree.
  pub fn append(mut self, node: impl Into<XMLNode>) -> ElementBuilder {
    self.0.children.push(node.into());
    self
  }

  /// Builds the `Element`.
  pub fn build(self) -> Element {
    self.0
  }

  pub fn to_node(self) -> XMLNode {
    XMLNode::Element(self.0)
  }

  pub fn into_text_node(self) -> TextNode {
    TextNode::new(self.0)
  }
}

impl From<ElementBuilder> for XMLNode {
  fn from(b: ElementBuilder) -> Self {
    b.to_node()
  }
}

/// Copy a parsed element, with its attributes, text and child elements,
/// into an owned tree. Comments and processing instructions are dropped.
pub fn from_roxmltree(node: roxmltree::Node) -> Element {
  let mut builder = Element::builder(node.tag_name().name());
  for attr in node.attributes() {
    builder = builder.attr(attr.name(), attr.value());
  }
  for child in node.children() {
    if child.is_element() {
      builder = builder.append(XMLNode::Element(from_roxmltree(child)));
    } else if child.is_text() {
      if let Some(text) = child.text() {
        builder = builder.text(text);
      }
    }
  }
  builder.build()
}
