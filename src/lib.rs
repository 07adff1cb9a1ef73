// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/*!
*svgshape* normalizes standalone SVG images into shapes that can be merged
into a single sprite document.

The entry point is the [`Shape`]: one logical SVG unit with an id derived
from its path-like name. A [`Shape`] is processed in three stages:

1. [`Shape::complement`] reconciles `width`/`height` with the `viewBox`,
   downscales oversized shapes, applies padding and injects `<title>` and
   `<desc>` metadata. The result is stored as the shape's *ready*
   serialization.
2. [`Shape::apply_namespace`] prefixes every element id and rewrites all
   references to it (hrefs, functional IRIs, stylesheet selectors), so
   shapes can coexist in one document without id collisions.
   [`Shape::reset_namespace`] restores the ready serialization.
3. [`Shape::distribute`] produces aligned variants: one master plus
   lightweight reference copies serialized as `<use>` elements.

Underneath sits a small SVG DOM: the [`Document`] arena owns all nodes,
and [`NodeId`]s link them. Element and attribute names are split into the
[`ElementId`]/[`AttributeId`] enums for the SVG subset this library acts
on, with a `String` fallback for everything else, which passes through
parsing and serialization untouched.

```rust
use svgshape::{Options, Shape};

let opt = Options::default();
let mut shape = Shape::new(
    "icons/home.svg",
    "<svg xmlns='http://www.w3.org/2000/svg' width='100' height='50'/>",
    &opt,
)?;

shape.complement(&opt)?;
assert_eq!(shape.id(), "icons--home");
assert_eq!(shape.width(), Some(100.0));
# Ok::<(), svgshape::Error>(())
```

[`Shape`]: struct.Shape.html
[`Shape::complement`]: struct.Shape.html#method.complement
[`Shape::apply_namespace`]: struct.Shape.html#method.apply_namespace
[`Shape::reset_namespace`]: struct.Shape.html#method.reset_namespace
[`Shape::distribute`]: struct.Shape.html#method.distribute
[`Document`]: struct.Document.html
[`NodeId`]: struct.NodeId.html
[`ElementId`]: enum.ElementId.html
[`AttributeId`]: enum.AttributeId.html
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod align;
mod attributes;
mod document;
mod error;
mod geometry;
mod name;
mod namespace;
mod options;
mod parser;
mod shape;
mod writer;

pub use crate::align::AlignRule;
pub use crate::attributes::{Attribute, Attributes, FilterSvgAttrs};
pub use crate::document::{
    Children,
    Descendants,
    Document,
    NodeEdge,
    NodeId,
    NodeType,
    Traverse,
};
pub use crate::error::Error;
pub use crate::geometry::{BoxSizing, Padding};
pub use crate::name::{
    AttributeId,
    AttributeQName,
    AttributeQNameRef,
    ElementId,
    QName,
    QNameRef,
    SvgId,
    TagName,
    TagNameRef,
};
pub use crate::options::{
    DimensionOptions,
    IdGenerator,
    IdOptions,
    Meta,
    Options,
    SpacingOptions,
    SvgOptions,
};
pub use crate::shape::Shape;
pub use crate::writer::{Indent, WriteOptions};
