// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use pretty_assertions::assert_eq;

use svgshape::{AttributeId, Document, ElementId, NodeType};

#[test]
fn attribute_values_are_editable_in_place() {
    let mut doc = Document::new();
    let root = doc.root();
    let svg = doc.create_element(ElementId::Svg);
    doc.append(root, svg);
    doc.set_attribute(svg, AttributeId::Fill, "url(#a)");
    doc.set_attribute(svg, AttributeId::Stroke, "none");

    for attr in doc.attributes_mut(svg).iter_mut() {
        attr.value = attr.value.replace("#a", "#b");
    }

    assert_eq!(doc.get_attribute(svg, AttributeId::Fill), Some("url(#b)"));
    assert_eq!(doc.get_attribute(svg, AttributeId::Stroke), Some("none"));
}

#[test]
fn detached_nodes_keep_their_content() {
    let mut doc = Document::new();
    let root = doc.root();
    let svg = doc.create_element(ElementId::Svg);
    doc.append(root, svg);
    let title = doc.create_element(ElementId::Title);
    doc.append(svg, title);
    let text = doc.create_node(NodeType::Text, "home");
    doc.append(title, text);

    doc.detach(title);

    assert!(!doc.has_children(svg));
    assert_eq!(doc.parent(title), None);
    assert_eq!(doc.text(text), "home");
}
