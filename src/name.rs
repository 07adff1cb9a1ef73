// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module contains qualified name wrappers used for element tag names
//! and attribute names.
//!
//! Only the names the normalization core has to recognize get a dedicated
//! ID. Everything else is carried as a plain string.

/// A trait for typed SVG names.
pub trait SvgId: Copy + PartialEq {
    /// Converts the ID into a name.
    fn as_str(&self) -> &'static str;
}

/// Tag names the core has to recognize.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum ElementId {
    Svg,
    Defs,
    Style,
    Title,
    Desc,
    Use,
}

impl ElementId {
    /// Parses an `ElementId` from a tag name.
    pub fn from_str(text: &str) -> Option<ElementId> {
        match text {
            "svg" => Some(ElementId::Svg),
            "defs" => Some(ElementId::Defs),
            "style" => Some(ElementId::Style),
            "title" => Some(ElementId::Title),
            "desc" => Some(ElementId::Desc),
            "use" => Some(ElementId::Use),
            _ => None,
        }
    }
}

impl SvgId for ElementId {
    fn as_str(&self) -> &'static str {
        match *self {
            ElementId::Svg => "svg",
            ElementId::Defs => "defs",
            ElementId::Style => "style",
            ElementId::Title => "title",
            ElementId::Desc => "desc",
            ElementId::Use => "use",
        }
    }
}

/// Attribute names the core has to recognize.
///
/// The variant order defines the attribute order during writing.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum AttributeId {
    Width,
    Height,
    ViewBox,
    Href,
    Style,
    Fill,
    Stroke,
    Filter,
    ClipPath,
    Mask,
    MarkerStart,
    MarkerMid,
    MarkerEnd,
    AriaLabelledBy,
}

impl AttributeId {
    /// Parses an `AttributeId` from an attribute name.
    pub fn from_str(text: &str) -> Option<AttributeId> {
        match text {
            "width" => Some(AttributeId::Width),
            "height" => Some(AttributeId::Height),
            "viewBox" => Some(AttributeId::ViewBox),
            "href" => Some(AttributeId::Href),
            "style" => Some(AttributeId::Style),
            "fill" => Some(AttributeId::Fill),
            "stroke" => Some(AttributeId::Stroke),
            "filter" => Some(AttributeId::Filter),
            "clip-path" => Some(AttributeId::ClipPath),
            "mask" => Some(AttributeId::Mask),
            "marker-start" => Some(AttributeId::MarkerStart),
            "marker-mid" => Some(AttributeId::MarkerMid),
            "marker-end" => Some(AttributeId::MarkerEnd),
            "aria-labelledby" => Some(AttributeId::AriaLabelledBy),
            _ => None,
        }
    }

    /// Returns `true` for the fixed set of presentation attributes that may
    /// carry a `url(#id)` reference.
    pub fn is_func_iri_target(&self) -> bool {
        match *self {
              AttributeId::Style
            | AttributeId::Fill
            | AttributeId::Stroke
            | AttributeId::Filter
            | AttributeId::ClipPath
            | AttributeId::Mask
            | AttributeId::MarkerStart
            | AttributeId::MarkerMid
            | AttributeId::MarkerEnd => true,
            _ => false,
        }
    }
}

impl SvgId for AttributeId {
    fn as_str(&self) -> &'static str {
        match *self {
            AttributeId::Width => "width",
            AttributeId::Height => "height",
            AttributeId::ViewBox => "viewBox",
            AttributeId::Href => "href",
            AttributeId::Style => "style",
            AttributeId::Fill => "fill",
            AttributeId::Stroke => "stroke",
            AttributeId::Filter => "filter",
            AttributeId::ClipPath => "clip-path",
            AttributeId::Mask => "mask",
            AttributeId::MarkerStart => "marker-start",
            AttributeId::MarkerMid => "marker-mid",
            AttributeId::MarkerEnd => "marker-end",
            AttributeId::AriaLabelledBy => "aria-labelledby",
        }
    }
}

/// Qualified name.
#[derive(Clone, PartialEq, Debug)]
pub enum QName<T: SvgId> {
    /// For a recognized SVG name.
    Id(T),
    /// For an unknown name.
    Name(String),
}

impl<T: SvgId> QName<T> {
    /// Returns `QName` as `QNameRef`.
    pub fn as_ref(&self) -> QNameRef<T> {
        match *self {
            QName::Id(id) => QNameRef::Id(id),
            QName::Name(ref name) => QNameRef::Name(name),
        }
    }

    /// Checks that this name has the specified ID.
    pub fn has_id(&self, id: T) -> bool {
        match *self {
            QName::Id(id2) => id == id2,
            _ => false,
        }
    }

    /// Returns the name as a string.
    pub fn as_str(&self) -> &str {
        match *self {
            QName::Id(id) => id.as_str(),
            QName::Name(ref name) => name,
        }
    }
}

/// Qualified name reference.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum QNameRef<'a, T: SvgId> {
    /// For a recognized SVG name.
    Id(T),
    /// For an unknown name.
    Name(&'a str),
}

impl<'a, T: SvgId> From<T> for QNameRef<'a, T> {
    fn from(value: T) -> Self {
        QNameRef::Id(value)
    }
}

impl<'a, T: SvgId> From<&'a str> for QNameRef<'a, T> {
    fn from(value: &'a str) -> Self {
        QNameRef::Name(value)
    }
}

impl<'a, T: SvgId> From<QNameRef<'a, T>> for QName<T> {
    fn from(value: QNameRef<'a, T>) -> Self {
        match value {
            QNameRef::Id(id) => QName::Id(id),
            QNameRef::Name(name) => QName::Name(name.into()),
        }
    }
}

/// A tag name.
pub type TagName = QName<ElementId>;
/// A tag name reference.
pub type TagNameRef<'a> = QNameRef<'a, ElementId>;
/// An attribute name.
pub type AttributeQName = QName<AttributeId>;
/// An attribute name reference.
pub type AttributeQNameRef<'a> = QNameRef<'a, AttributeId>;
