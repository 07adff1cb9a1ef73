// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::warn;

use crate::{
    AttributeId,
    Document,
    ElementId,
    Error,
    NodeId,
    NodeType,
};

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Leading declarations captured verbatim before the XML parse.
///
/// `roxmltree` does not preserve the prolog, so both parts are clipped
/// from the raw text and re-emitted on demand during writing.
#[derive(Clone, Debug, Default)]
pub(crate) struct Declarations {
    pub xml_declaration: Option<String>,
    pub doctype: Option<String>,
}

/// Parses an SVG document from a string.
///
/// The document must contain an `svg` root element, otherwise
/// `Error::NoSvgElement` is returned.
pub(crate) fn parse_svg(text: &str) -> Result<(Document, Declarations), Error> {
    let declarations = parse_declarations(text);

    let ro_opt = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let ro_doc = roxmltree::Document::parse_with_options(text, ro_opt)?;

    if ro_doc.root_element().tag_name().name() != "svg" {
        return Err(Error::NoSvgElement);
    }

    let mut doc = Document::new();
    let root = doc.root();
    for child in ro_doc.root().children() {
        convert_node(child, &mut doc, root);
    }

    if doc.svg_element().is_none() {
        return Err(Error::NoSvgElement);
    }

    Ok((doc, declarations))
}

fn convert_node(ro_node: roxmltree::Node, doc: &mut Document, parent: NodeId) {
    match ro_node.node_type() {
        roxmltree::NodeType::Element => {
            let node = convert_element(ro_node, doc);
            doc.append(parent, node);

            for child in ro_node.children() {
                convert_node(child, doc, node);
            }
        }
        roxmltree::NodeType::Text => {
            let text = ro_node.text().unwrap_or("");
            // Whitespace-only text nodes are pure formatting.
            // Dropping them keeps serialization stable across reparses.
            if !text.trim().is_empty() {
                let node = doc.create_node(NodeType::Text, text);
                doc.append(parent, node);
            }
        }
        roxmltree::NodeType::Comment => {
            let node = doc.create_node(NodeType::Comment, ro_node.text().unwrap_or(""));
            doc.append(parent, node);
        }
        roxmltree::NodeType::PI | roxmltree::NodeType::Root => {}
    }
}

fn convert_element(ro_node: roxmltree::Node, doc: &mut Document) -> NodeId {
    let tag_name = ro_node.tag_name().name();
    let node = match ElementId::from_str(tag_name) {
        Some(eid) => doc.create_element(eid),
        None => doc.create_element(tag_name),
    };

    for attr in ro_node.attributes() {
        let local = attr.name();

        match attr.namespace() {
            None => {}
            Some(XLINK_NS) => {
                if local == "href" {
                    doc.set_attribute(node, AttributeId::Href, attr.value());
                } else {
                    warn!("an unsupported xlink attribute 'xlink:{}' is ignored", local);
                }
                continue;
            }
            Some(XML_NS) => {
                let name = format!("xml:{}", local);
                doc.set_attribute(node, name.as_str(), attr.value());
                continue;
            }
            Some(ns) => {
                warn!("an attribute '{}' with an unsupported namespace '{}' is ignored", local, ns);
                continue;
            }
        }

        if local == "id" {
            doc.set_id(node, attr.value());
            continue;
        }

        match AttributeId::from_str(local) {
            Some(aid) => doc.set_attribute(node, aid, attr.value()),
            None => doc.set_attribute(node, local, attr.value()),
        }
    }

    node
}

fn parse_declarations(text: &str) -> Declarations {
    let mut decl = Declarations::default();
    let mut rest = text.trim_start();

    if rest.starts_with("<?xml") {
        if let Some(end) = rest.find("?>") {
            decl.xml_declaration = Some(rest[..end + 2].to_string());
            rest = rest[end + 2..].trim_start();
        }
    }

    if rest.starts_with("<!DOCTYPE") {
        // A doctype may carry an internal subset in brackets,
        // where '>' is allowed before the closing ']'.
        let close = match rest.find('[') {
            Some(open) if open < rest.find('>').unwrap_or(rest.len()) => {
                rest[open..].find(']')
                    .and_then(|i| rest[open + i..].find('>').map(|j| open + i + j))
            }
            _ => rest.find('>'),
        };

        if let Some(close) = close {
            decl.doctype = Some(rest[..close + 1].to_string());
        }
    }

    decl
}
