// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use slab::Slab;

use crate::{
    Attribute,
    AttributeQNameRef,
    Attributes,
    ElementId,
    TagName,
    TagNameRef,
    QNameRef,
};

/// An index of a node inside a [`Document`] arena.
///
/// Parent/child/sibling links are plain indexes and not smart pointers,
/// so the tree has no ownership cycles. A `NodeId` is only valid for the
/// document that produced it.
///
/// [`Document`]: struct.Document.html
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeId(usize);

/// List of supported node types.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NodeType {
    /// The root node of the `Document`.
    ///
    /// Constructed with `Document`. Unavailable to the user.
    Root,
    /// An element node.
    ///
    /// Only an element can have attributes, an ID and a tag name.
    Element,
    /// A text node.
    Text,
    /// A comment node.
    Comment,
}

#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    pub node_type: NodeType,
    pub tag_name: TagName,
    pub id: String,
    pub attributes: Attributes,
    pub text: String,
    parent: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
}

impl NodeData {
    fn new(node_type: NodeType, tag_name: TagName, text: String) -> NodeData {
        NodeData {
            node_type,
            tag_name,
            id: String::new(),
            attributes: Attributes::new(),
            text,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
        }
    }
}

/// Container of document nodes.
///
/// All nodes are owned by the `Document` in a [`Slab`] arena and are
/// addressed by [`NodeId`]. New nodes can be created only through the
/// `Document`.
///
/// [`Slab`]: https://docs.rs/slab
/// [`NodeId`]: struct.NodeId.html
#[derive(Clone)]
pub struct Document {
    nodes: Slab<NodeData>,
    root: NodeId,
}

impl Document {
    /// Constructs a new `Document` with an empty root node.
    pub fn new() -> Document {
        let mut nodes = Slab::new();
        let root = NodeId(nodes.insert(NodeData::new(
            NodeType::Root,
            TagName::Name(String::new()),
            String::new(),
        )));

        Document { nodes, root }
    }

    /// Returns the root node's ID.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Constructs a new detached element node.
    ///
    /// # Panics
    ///
    /// Panics if a string tag name is empty.
    pub fn create_element<'a, T>(&mut self, tag_name: T) -> NodeId
        where TagNameRef<'a>: From<T>
    {
        let tn = TagNameRef::from(tag_name);
        if let QNameRef::Name(name) = tn {
            if name.is_empty() {
                panic!("supplied tag name is empty");
            }
        }

        NodeId(self.nodes.insert(NodeData::new(
            NodeType::Element,
            tn.into(),
            String::new(),
        )))
    }

    /// Constructs a new detached non-element node.
    ///
    /// # Panics
    ///
    /// Panics if `node_type` is `Element` or `Root`.
    pub fn create_node<S: Into<String>>(&mut self, node_type: NodeType, text: S) -> NodeId {
        assert!(node_type != NodeType::Element && node_type != NodeType::Root);

        NodeId(self.nodes.insert(NodeData::new(
            node_type,
            TagName::Name(String::new()),
            text.into(),
        )))
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    /// Returns the node's type.
    pub fn node_type(&self, id: NodeId) -> NodeType {
        self.node(id).node_type
    }

    /// Returns `true` if the node is an element node.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.node_type(id) == NodeType::Element
    }

    /// Returns the tag name of an element node.
    pub fn tag_name(&self, id: NodeId) -> &TagName {
        &self.node(id).tag_name
    }

    /// Returns `true` if the node has the same tag name as supplied.
    pub fn has_tag_name<'a, T>(&self, id: NodeId, tag_name: T) -> bool
        where TagNameRef<'a>: From<T>
    {
        self.node(id).tag_name.as_ref() == TagNameRef::from(tag_name)
    }

    /// Returns the element's ID.
    pub fn id(&self, id: NodeId) -> &str {
        &self.node(id).id
    }

    /// Returns `true` if the element has a non-empty ID.
    pub fn has_id(&self, id: NodeId) -> bool {
        !self.node(id).id.is_empty()
    }

    /// Sets the element's ID.
    pub fn set_id<S: Into<String>>(&mut self, id: NodeId, value: S) {
        debug_assert_eq!(self.node_type(id), NodeType::Element);
        self.node_mut(id).id = value.into();
    }

    /// Returns the text data of a non-element node.
    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    /// Sets the text data of a non-element node.
    pub fn set_text<S: Into<String>>(&mut self, id: NodeId, text: S) {
        debug_assert_ne!(self.node_type(id), NodeType::Element);
        self.node_mut(id).text = text.into();
    }

    /// Returns a reference to the element's attributes.
    pub fn attributes(&self, id: NodeId) -> &Attributes {
        &self.node(id).attributes
    }

    /// Returns a mutable reference to the element's attributes.
    pub fn attributes_mut(&mut self, id: NodeId) -> &mut Attributes {
        &mut self.node_mut(id).attributes
    }

    /// Inserts a new attribute, overwriting an existing one with the same name.
    pub fn set_attribute<'a, N, S>(&mut self, id: NodeId, name: N, value: S)
        where AttributeQNameRef<'a>: From<N>, S: Into<String>
    {
        debug_assert_eq!(self.node_type(id), NodeType::Element);
        let attr = Attribute::new(name, value);
        self.node_mut(id).attributes.insert(attr);
    }

    /// Returns an attribute value.
    pub fn get_attribute<'a, N>(&self, id: NodeId, name: N) -> Option<&str>
        where AttributeQNameRef<'a>: From<N>
    {
        self.node(id).attributes.get_value(name)
    }

    /// Returns `true` if the element has an attribute with such a name.
    pub fn has_attribute<'a, N>(&self, id: NodeId, name: N) -> bool
        where AttributeQNameRef<'a>: From<N>
    {
        self.node(id).attributes.contains(name)
    }

    /// Removes an attribute from the element.
    pub fn remove_attribute<'a, N>(&mut self, id: NodeId, name: N)
        where AttributeQNameRef<'a>: From<N>
    {
        self.node_mut(id).attributes.remove(name);
    }

    /// Returns the parent node, including the document root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Returns the first child.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    /// Returns the last child.
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).last_child
    }

    /// Returns the next sibling.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// Returns the previous sibling.
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev_sibling
    }

    /// Returns `true` if the node has children.
    pub fn has_children(&self, id: NodeId) -> bool {
        self.node(id).first_child.is_some()
    }

    /// Appends a node as the parent's last child.
    ///
    /// The node is detached from its previous position first.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        debug_assert_ne!(parent, child);
        self.detach(child);

        let last = self.node(parent).last_child;
        match last {
            Some(last) => {
                self.node_mut(last).next_sibling = Some(child);
                self.node_mut(child).prev_sibling = Some(last);
            }
            None => {
                self.node_mut(parent).first_child = Some(child);
            }
        }

        self.node_mut(parent).last_child = Some(child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Inserts a node as the parent's first child.
    ///
    /// The node is detached from its previous position first.
    pub fn prepend(&mut self, parent: NodeId, child: NodeId) {
        debug_assert_ne!(parent, child);
        self.detach(child);

        let first = self.node(parent).first_child;
        match first {
            Some(first) => {
                self.node_mut(first).prev_sibling = Some(child);
                self.node_mut(child).next_sibling = Some(first);
            }
            None => {
                self.node_mut(parent).last_child = Some(child);
            }
        }

        self.node_mut(parent).first_child = Some(child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Detaches a node from the tree, keeping it in the arena.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let n = self.node(id);
            (n.parent, n.prev_sibling, n.next_sibling)
        };

        if let Some(next) = next {
            self.node_mut(next).prev_sibling = prev;
        } else if let Some(parent) = parent {
            self.node_mut(parent).last_child = prev;
        }

        if let Some(prev) = prev {
            self.node_mut(prev).next_sibling = next;
        } else if let Some(parent) = parent {
            self.node_mut(parent).first_child = next;
        }

        let n = self.node_mut(id);
        n.parent = None;
        n.prev_sibling = None;
        n.next_sibling = None;
    }

    /// Removes a node and all its children from the tree and the arena.
    pub fn remove_node(&mut self, id: NodeId) {
        debug_assert_ne!(id, self.root);

        let mut subtree = Vec::with_capacity(16);
        subtree.push(id);
        let mut i = 0;
        while i < subtree.len() {
            let mut child = self.first_child(subtree[i]);
            while let Some(c) = child {
                subtree.push(c);
                child = self.next_sibling(c);
            }
            i += 1;
        }

        self.detach(id);
        for n in subtree {
            self.nodes.remove(n.0);
        }
    }

    /// Returns the first element child with the `svg` tag name of the root node.
    pub fn svg_element(&self) -> Option<NodeId> {
        self.children(self.root)
            .find(|&n| self.has_tag_name(n, ElementId::Svg))
    }

    /// Returns an iterator over the node's children.
    pub fn children(&self, id: NodeId) -> Children {
        Children {
            doc: self,
            next: self.first_child(id),
        }
    }

    /// Returns an iterator over the subtree in document order,
    /// including the start node.
    pub fn descendants(&self, id: NodeId) -> Descendants {
        Descendants(self.traverse(id))
    }

    /// Returns an iterator over the subtree edges.
    ///
    /// Each node is reported twice: once when entered and once when left.
    pub fn traverse(&self, id: NodeId) -> Traverse {
        Traverse {
            doc: self,
            root: id,
            next: Some(NodeEdge::Start(id)),
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for edge in self.traverse(self.root) {
            if let NodeEdge::Start(id) = edge {
                let n = self.node(id);
                match n.node_type {
                    NodeType::Root => writeln!(f, "Root()")?,
                    NodeType::Element => {
                        write!(f, "Element({}", n.tag_name.as_str())?;
                        if !n.id.is_empty() {
                            write!(f, " id='{}'", n.id)?;
                        }
                        if !n.attributes.is_empty() {
                            write!(f, " {}", n.attributes)?;
                        }
                        writeln!(f, ")")?;
                    }
                    NodeType::Text => writeln!(f, "Text({})", n.text)?,
                    NodeType::Comment => writeln!(f, "Comment({})", n.text)?,
                }
            }
        }

        Ok(())
    }
}

/// An iterator over a node's children.
pub struct Children<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.doc.next_sibling(id);
        Some(id)
    }
}

/// A subtree traversal edge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NodeEdge {
    /// A node is entered, before any of its children.
    Start(NodeId),
    /// A node is left, after all of its children.
    End(NodeId),
}

/// An iterator over the subtree edges.
pub struct Traverse<'a> {
    doc: &'a Document,
    root: NodeId,
    next: Option<NodeEdge>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = NodeEdge;

    fn next(&mut self) -> Option<NodeEdge> {
        let edge = self.next?;

        self.next = match edge {
            NodeEdge::Start(id) => {
                match self.doc.first_child(id) {
                    Some(child) => Some(NodeEdge::Start(child)),
                    None => Some(NodeEdge::End(id)),
                }
            }
            NodeEdge::End(id) => {
                if id == self.root {
                    None
                } else {
                    match self.doc.next_sibling(id) {
                        Some(sibling) => Some(NodeEdge::Start(sibling)),
                        // The root has been entered, so a parent always exists.
                        None => self.doc.parent(id).map(NodeEdge::End),
                    }
                }
            }
        };

        Some(edge)
    }
}

/// An iterator over a subtree in document order.
pub struct Descendants<'a>(Traverse<'a>);

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            match self.0.next()? {
                NodeEdge::Start(id) => return Some(id),
                NodeEdge::End(_) => {}
            }
        }
    }
}
