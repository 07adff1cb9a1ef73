// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use xmlwriter::XmlWriter;

use crate::{
    AttributeId,
    Document,
    FilterSvgAttrs,
    NodeEdge,
    NodeId,
    NodeType,
    QName,
    SvgId,
};

pub use xmlwriter::Indent;

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub(crate) const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Options that define SVG writing.
#[derive(Clone, Copy, Debug)]
pub struct WriteOptions {
    /// Use single quote marks instead of double quotes.
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Sets the XML nodes indent.
    ///
    /// The default is `Indent::None`: sprite-bound output is compact, and a
    /// compact form survives a reparse byte-for-byte, which the namespace
    /// reset relies on.
    pub indent: Indent,

    /// Sets the XML attributes indent.
    ///
    /// Default: `None`
    pub attributes_indent: Indent,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            use_single_quote: false,
            indent: Indent::None,
            attributes_indent: Indent::None,
        }
    }
}

/// Writes a document into a string.
///
/// With `strip_namespace` set, the root element's `xmlns`/`xmlns:xlink`
/// declarations are omitted. That is the inline form: a sprite declares
/// the namespaces once on its own root.
pub(crate) fn write_dom(doc: &Document, opt: &WriteOptions, strip_namespace: bool) -> String {
    let xml_opt = xmlwriter::Options {
        use_single_quote: opt.use_single_quote,
        indent: opt.indent,
        attributes_indent: opt.attributes_indent,
    };

    let mut xml = XmlWriter::new(xml_opt);
    for edge in doc.traverse(doc.root()) {
        match edge {
            NodeEdge::Start(node) => {
                match doc.node_type(node) {
                    NodeType::Root => {}
                    NodeType::Element => {
                        xml.start_element(doc.tag_name(node).as_str());
                        write_attributes(doc, node, strip_namespace, &mut xml);

                        let has_text = doc.children(node)
                            .any(|c| doc.node_type(c) == NodeType::Text);
                        if has_text {
                            xml.set_preserve_whitespaces(true);
                        }
                    }
                    NodeType::Comment => {
                        xml.write_comment(doc.text(node));
                    }
                    NodeType::Text => {
                        xml.write_text(doc.text(node));
                    }
                }
            }
            NodeEdge::End(node) => {
                if doc.is_element(node) {
                    xml.end_element();
                    xml.set_preserve_whitespaces(false);
                }
            }
        }
    }

    xml.end_document()
}

/// Writes attributes.
///
/// Order:
/// - `id`
/// - recognized SVG attributes in a fixed order
/// - unknown attributes in document order
fn write_attributes(
    doc: &Document,
    node: NodeId,
    strip_namespace: bool,
    xml: &mut XmlWriter,
) {
    if doc.has_tag_name(node, crate::ElementId::Svg)
        && doc.parent(node) == Some(doc.root())
        && !strip_namespace
    {
        xml.write_attribute("xmlns", SVG_NS);

        let xlink_needed = doc.descendants(node)
            .any(|n| doc.is_element(n) && doc.has_attribute(n, AttributeId::Href));
        if xlink_needed {
            xml.write_attribute("xmlns:xlink", XLINK_NS);
        }
    }

    if doc.has_id(node) {
        xml.write_attribute("id", doc.id(node));
    }

    let attrs = doc.attributes(node);

    let mut ids: Vec<_> = attrs.iter().svg().collect();
    ids.sort_by_key(|&(id, _)| id as usize);

    for &(id, attr) in &ids {
        let name = match id {
            AttributeId::Href => "xlink:href",
            _ => id.as_str(),
        };

        xml.write_attribute(name, &attr.value);
    }

    for attr in attrs.iter() {
        if let QName::Name(ref name) = attr.name {
            xml.write_attribute(name, &attr.value);
        }
    }
}
