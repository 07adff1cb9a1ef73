// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::iter::FilterMap;
use std::slice::{Iter, IterMut};

use crate::{AttributeId, AttributeQName, AttributeQNameRef, QName};

/// Representation of an XML attribute.
///
/// The value is kept as the verbatim string the document carried.
/// The normalization core rewrites references inside attribute values,
/// it never interprets them.
#[derive(Clone, PartialEq, Debug)]
pub struct Attribute {
    /// Attribute name.
    pub name: AttributeQName,
    /// Attribute value.
    pub value: String,
}

impl Attribute {
    /// Constructs a new attribute.
    pub fn new<'a, N, S>(name: N, value: S) -> Attribute
        where AttributeQNameRef<'a>: From<N>, S: Into<String>
    {
        Attribute {
            name: AttributeQNameRef::from(name).into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name.as_str(), self.value)
    }
}

/// An iterator over recognized SVG attributes.
pub trait FilterSvgAttrs: Iterator {
    /// Filters attributes with a recognized name.
    fn svg<'a>(self) -> FilterMap<Self, fn(&Attribute) -> Option<(AttributeId, &Attribute)>>
        where Self: Iterator<Item = &'a Attribute> + Sized
    {
        fn is_svg(attr: &Attribute) -> Option<(AttributeId, &Attribute)> {
            if let QName::Id(id) = attr.name {
                return Some((id, attr));
            }

            None
        }

        self.filter_map(is_svg)
    }
}

impl<'a, I: Iterator<Item = &'a Attribute>> FilterSvgAttrs for I {}

/// An attributes list.
#[derive(Clone, PartialEq, Debug)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    /// Constructs a new attributes list.
    #[inline]
    pub(crate) fn new() -> Attributes {
        Attributes(Vec::new())
    }

    /// Returns an optional reference to [`Attribute`].
    ///
    /// [`Attribute`]: struct.Attribute.html
    pub fn get<'a, N>(&self, name: N) -> Option<&Attribute>
        where AttributeQNameRef<'a>: From<N>
    {
        let name = AttributeQNameRef::from(name);
        self.0.iter().find(|a| a.name.as_ref() == name)
    }

    /// Returns an optional reference to an attribute value.
    pub fn get_value<'a, N>(&self, name: N) -> Option<&str>
        where AttributeQNameRef<'a>: From<N>
    {
        self.get(name).map(|a| a.value.as_str())
    }

    /// Returns an optional mutable reference to an attribute value.
    pub fn get_value_mut<'a, N>(&mut self, name: N) -> Option<&mut String>
        where AttributeQNameRef<'a>: From<N>
    {
        let name = AttributeQNameRef::from(name);
        self.0.iter_mut().find(|a| a.name.as_ref() == name).map(|a| &mut a.value)
    }

    /// Inserts a new attribute.
    ///
    /// An existing attribute with the same name is overwritten in place,
    /// so the document attribute order stays stable.
    pub(crate) fn insert(&mut self, attr: Attribute) {
        let idx = self.0.iter().position(|x| x.name == attr.name);
        match idx {
            Some(i) => self.0[i] = attr,
            None => self.0.push(attr),
        }
    }

    /// Removes an existing attribute.
    pub(crate) fn remove<'a, N>(&mut self, name: N)
        where AttributeQNameRef<'a>: From<N>
    {
        let name = AttributeQNameRef::from(name);
        let idx = self.0.iter().position(|x| x.name.as_ref() == name);
        if let Some(i) = idx {
            self.0.remove(i);
        }
    }

    /// Returns `true` if the container contains an attribute with such a name.
    #[inline]
    pub fn contains<'a, N>(&self, name: N) -> bool
        where AttributeQNameRef<'a>: From<N>
    {
        let name = AttributeQNameRef::from(name);
        self.0.iter().any(|a| a.name.as_ref() == name)
    }

    /// Returns the count of the attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the attributes list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator.
    #[inline]
    pub fn iter(&self) -> Iter<Attribute> {
        self.0.iter()
    }

    /// Returns a mutable iterator.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<Attribute> {
        self.0.iter_mut()
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        let mut first = true;
        for attr in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", attr)?;
            first = false;
        }

        Ok(())
    }
}
