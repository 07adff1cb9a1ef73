// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::str::FromStr;

use log::warn;
use svgtypes::{Length, LengthUnit, ViewBox};

use crate::align;
use crate::geometry::{self, write_num};
use crate::namespace;
use crate::parser::{parse_svg, Declarations};
use crate::writer::{self, WriteOptions};
use crate::{
    AttributeId,
    Document,
    ElementId,
    Error,
    NodeId,
    NodeType,
    Options,
    SvgId,
};

/// One normalized SVG unit eligible for inclusion in a sprite.
///
/// A shape is created from a loaded document and mutated in place by the
/// normalization passes:
///
/// 1. [`complement()`] reconciles dimensions and the viewBox, applies
///    padding, injects title/description metadata and stores the finalized
///    ("ready") serialization.
/// 2. [`apply_namespace()`] prefixes every id and rewrites every reference
///    to it, so several shapes can coexist in one sprite. Reversible via
///    [`reset_namespace()`], which reloads the ready serialization.
/// 3. [`distribute()`] produces aligned variants: one master plus
///    lightweight reference copies.
///
/// [`complement()`]: #method.complement
/// [`apply_namespace()`]: #method.apply_namespace
/// [`reset_namespace()`]: #method.reset_namespace
/// [`distribute()`]: #method.distribute
#[derive(Clone)]
pub struct Shape {
    name: String,
    id: String,
    base: String,
    state: Option<String>,

    pub(crate) doc: Document,
    declarations: Declarations,

    width: Option<f64>,
    height: Option<f64>,
    view_box: Option<ViewBox>,
    scale: f64,

    align: f64,
    master: Option<String>,
    copy_count: usize,

    ready: Option<String>,
    namespaced: bool,
}

impl Shape {
    /// Constructs a new `Shape` from raw markup.
    ///
    /// `name` is the shape's logical, path-like name. It is immutable and
    /// drives the id derivation and the metadata/alignment lookups.
    ///
    /// # Errors
    ///
    /// - [`Error::XmlParse`] when the markup is not well-formed.
    /// - [`Error::NoSvgElement`] when the root element is not `svg`.
    /// - [`Error::InvalidAttributeValue`] when `width`, `height` or
    ///   `viewBox` cannot be interpreted.
    ///
    /// [`Error::XmlParse`]: enum.Error.html
    /// [`Error::NoSvgElement`]: enum.Error.html
    /// [`Error::InvalidAttributeValue`]: enum.Error.html
    pub fn new(name: &str, text: &str, opt: &Options) -> Result<Shape, Error> {
        let (mut doc, declarations) = parse_svg(text)?;
        let svg = doc.svg_element().ok_or(Error::NoSvgElement)?;

        let id = opt.id.generate(name);
        let (base, state) = match id.find(&opt.id.pseudo) {
            Some(pos) if !opt.id.pseudo.is_empty() => {
                let state = id[pos + opt.id.pseudo.len()..].to_string();
                (id[..pos].to_string(), Some(state))
            }
            _ => (id.clone(), None),
        };

        let width = take_dimension(&mut doc, svg, AttributeId::Width)?;
        let height = take_dimension(&mut doc, svg, AttributeId::Height)?;

        let view_box = match doc.get_attribute(svg, AttributeId::ViewBox) {
            Some(text) => {
                let vb = ViewBox::from_str(text).map_err(|_| {
                    Error::InvalidAttributeValue(format!("viewBox '{}'", text))
                })?;
                Some(vb)
            }
            None => None,
        };
        doc.remove_attribute(svg, AttributeId::ViewBox);

        Ok(Shape {
            name: name.to_string(),
            id,
            base,
            state,
            doc,
            declarations,
            width,
            height,
            view_box,
            scale: 1.0,
            align: 0.0,
            master: None,
            copy_count: 0,
            ready: None,
            namespaced: false,
        })
    }

    /// Returns the shape's logical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the shape's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the shape's id without the pseudo-state suffix.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the shape's pseudo-state, if any.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Returns the shape's width, if established.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Returns the shape's height, if established.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Returns the downscale factor applied during normalization.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the shape's alignment datum.
    pub fn align(&self) -> f64 {
        self.align
    }

    /// Returns the master shape's id when this shape is a distributed
    /// reference copy.
    pub fn master(&self) -> Option<&str> {
        self.master.as_deref()
    }

    /// Returns the number of secondary copies spawned from this shape.
    pub fn copy_count(&self) -> usize {
        self.copy_count
    }

    /// Returns the shape's viewBox.
    ///
    /// When the document never declared one it is synthesized as
    /// `(0, 0, width, height)` on the first request and cached.
    pub fn view_box(&mut self) -> Option<ViewBox> {
        if self.view_box.is_none() {
            if let (Some(w), Some(h)) = (self.width, self.height) {
                self.view_box = Some(ViewBox::new(0.0, 0.0, w, h));
            }
        }

        self.view_box
    }

    /// Runs the normalization pipeline.
    ///
    /// Strict order: dimension determination and limiting, padding,
    /// metadata injection. When all steps succeed, the current tree is
    /// serialized and stored as the shape's ready representation, which
    /// subsequent namespace operations read and restore from.
    ///
    /// A failure in any step aborts the pipeline. No ready snapshot is
    /// taken, so the shape stays ineligible for namespacing and output.
    pub fn complement(&mut self, opt: &Options) -> Result<(), Error> {
        if self.master.is_some() {
            return Err(Error::NotPermitted("a reference copy is never normalized"));
        }

        self.complement_dimensions(opt)?;
        self.apply_padding(opt)?;
        self.flush_dimensions(opt)?;
        self.complement_meta(opt)?;

        self.ready = Some(writer::write_dom(&self.doc, &WriteOptions::default(), false));

        Ok(())
    }

    fn complement_dimensions(&mut self, opt: &Options) -> Result<(), Error> {
        // Explicit dimensions win; otherwise they derive from the viewBox.
        // There is no rasterization fallback: without either, the geometry
        // cannot be inferred.
        if self.width.is_none() || self.height.is_none() {
            match self.view_box {
                Some(vb) => {
                    self.width.get_or_insert(vb.w);
                    self.height.get_or_insert(vb.h);
                }
                None => return Err(Error::MissingGeometry(self.name.clone())),
            }
        }

        let (width, height) = match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            _ => return Err(Error::MissingGeometry(self.name.clone())),
        };

        // The viewBox must capture the pre-scale coordinate system.
        self.view_box();

        let dim = &opt.dimension;
        let scaled = geometry::limit_dimensions(
            width,
            height,
            &opt.spacing.padding,
            opt.spacing.box_sizing,
            dim.max_width,
            dim.max_height,
            dim.precision,
        );

        self.width = Some(geometry::round_precision(scaled.width, dim.precision));
        self.height = Some(geometry::round_precision(scaled.height, dim.precision));
        self.scale *= scaled.scale;

        Ok(())
    }

    fn apply_padding(&mut self, opt: &Options) -> Result<(), Error> {
        let padding = &opt.spacing.padding;
        if padding.is_zero() {
            return Ok(());
        }

        let precision = opt.dimension.precision;

        // The padding is specified in final output units, while the viewBox
        // keeps the original coordinates, hence the division by the scale.
        let mut vb = match self.view_box() {
            Some(vb) => vb,
            None => return Err(Error::MissingGeometry(self.name.clone())),
        };
        geometry::pad_view_box(&mut vb, padding, self.scale, precision);
        self.view_box = Some(vb);

        if let Some(w) = self.width {
            self.width = Some(geometry::round_precision(w + padding.horizontal(), precision));
        }
        if let Some(h) = self.height {
            self.height = Some(geometry::round_precision(h + padding.vertical(), precision));
        }

        Ok(())
    }

    fn flush_dimensions(&mut self, opt: &Options) -> Result<(), Error> {
        let svg = self.doc.svg_element().ok_or(Error::NoSvgElement)?;
        let precision = opt.dimension.precision;

        if let Some(vb) = self.view_box() {
            let value = format!(
                "{} {} {} {}",
                write_num(vb.x, precision),
                write_num(vb.y, precision),
                write_num(vb.w, precision),
                write_num(vb.h, precision),
            );
            self.doc.set_attribute(svg, AttributeId::ViewBox, value);
        }

        if opt.dimension.attributes {
            if let Some(w) = self.width {
                self.doc.set_attribute(svg, AttributeId::Width, write_num(w, precision));
            }
            if let Some(h) = self.height {
                self.doc.set_attribute(svg, AttributeId::Height, write_num(h, precision));
            }
        } else {
            self.doc.remove_attribute(svg, AttributeId::Width);
            self.doc.remove_attribute(svg, AttributeId::Height);
        }

        Ok(())
    }

    fn complement_meta(&mut self, opt: &Options) -> Result<(), Error> {
        let svg = self.doc.svg_element().ok_or(Error::NoSvgElement)?;

        let meta = opt.meta.get(&self.id).or_else(|| opt.meta.get(&self.base));
        let mut labels = Vec::new();

        if let Some(meta) = meta {
            if let Some(ref text) = meta.description {
                if text.is_empty() {
                    warn!("an empty description for '{}' is ignored", self.id);
                } else {
                    let desc_id = format!("{}-desc", self.id);
                    self.set_meta_element(svg, ElementId::Desc, text, &desc_id);
                    labels.push(desc_id);
                }
            }

            if let Some(ref text) = meta.title {
                if text.is_empty() {
                    warn!("an empty title for '{}' is ignored", self.id);
                } else {
                    let title_id = format!("{}-title", self.id);
                    self.set_meta_element(svg, ElementId::Title, text, &title_id);
                    labels.push(title_id);
                }
            }
        }

        if labels.is_empty() {
            self.doc.remove_attribute(svg, AttributeId::AriaLabelledBy);
        } else {
            self.doc.set_attribute(svg, AttributeId::AriaLabelledBy, labels.join(" "));
        }

        Ok(())
    }

    /// Sets the text and id of a `<desc>`/`<title>` child, creating the
    /// element as the root's first child when missing.
    fn set_meta_element(&mut self, svg: NodeId, eid: ElementId, text: &str, id: &str) {
        let node = match self.doc.children(svg).find(|&n| self.doc.has_tag_name(n, eid)) {
            Some(n) => n,
            None => {
                let n = self.doc.create_element(eid);
                self.doc.prepend(svg, n);
                n
            }
        };

        let children: Vec<_> = self.doc.children(node).collect();
        for child in children {
            self.doc.remove_node(child);
        }
        let text_node = self.doc.create_node(NodeType::Text, text);
        self.doc.append(node, text_node);

        self.doc.set_id(node, id);
    }

    /// Returns `true` once `complement()` has produced the ready
    /// representation.
    pub fn is_ready(&self) -> bool {
        self.ready.is_some()
    }

    /// Prefixes every id in the document with `prefix` and rewrites every
    /// reference to it, so the shape's ids cannot collide with another
    /// shape's ids once merged into a sprite.
    ///
    /// Idempotent per namespace: a second call with the document already
    /// namespaced is a no-op. Gated by `Options.svg.namespace_ids`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotPermitted`] when the shape has no ready
    ///   representation yet. Namespacing before `complement()` is a
    ///   caller bug.
    /// - [`Error::InvalidCss`] when selector text inside a `<style>`
    ///   element cannot be parsed.
    ///
    /// [`Error::NotPermitted`]: enum.Error.html
    /// [`Error::InvalidCss`]: enum.Error.html
    pub fn apply_namespace(&mut self, prefix: &str, opt: &Options) -> Result<(), Error> {
        if !opt.svg.namespace_ids {
            return Ok(());
        }

        if self.ready.is_none() {
            return Err(Error::NotPermitted("namespacing requires a complemented shape"));
        }

        if self.namespaced {
            return Ok(());
        }

        namespace::apply(&mut self.doc, prefix)?;
        self.namespaced = true;

        Ok(())
    }

    /// Reverts the working tree to the ready representation and clears
    /// the namespaced flag.
    ///
    /// This is not an undo of individual rewrites but a full reload of the
    /// serialization stored by `complement()`.
    pub fn reset_namespace(&mut self) -> Result<(), Error> {
        if !self.namespaced {
            return Ok(());
        }

        match self.ready {
            Some(ref ready) => {
                let (doc, _) = parse_svg(ready)?;
                self.doc = doc;
                self.namespaced = false;
                Ok(())
            }
            None => Err(Error::NotPermitted("no ready representation to restore")),
        }
    }

    /// Produces aligned variants of this shape.
    ///
    /// Consumes the shape and returns an ordered list: the original shape
    /// mutated to reflect the first alignment rule, plus one reference copy
    /// per remaining rule. Each copy holds no drawable content of its own,
    /// only an identity and a link to the master.
    ///
    /// The rule list comes from `Options.align`, keyed by the shape's id or
    /// base name with a `*` wildcard fallback.
    pub fn distribute(mut self, opt: &Options) -> Vec<Shape> {
        let rules = align::rules_for(opt, &self.id, &self.base);

        self.rename(&rules[0].template, opt);
        self.align = rules[0].align;
        self.copy_count = rules.len() - 1;

        let master_id = self.id.clone();
        let copies: Vec<Shape> = rules[1..].iter().map(|rule| {
            let mut copy = self.clone();
            copy.rename(&rule.template, opt);
            copy.align = rule.align;
            copy.master = Some(master_id.clone());
            copy.copy_count = 0;
            copy
        }).collect();

        let mut shapes = Vec::with_capacity(rules.len());
        shapes.push(self);
        shapes.extend(copies);
        shapes
    }

    fn rename(&mut self, template: &str, opt: &Options) {
        self.base = template.replace("%s", &self.base);
        self.id = match self.state {
            Some(ref state) => format!("{}{}{}", self.base, opt.id.pseudo, state),
            None => self.base.clone(),
        };
    }

    /// Serializes the shape as a standalone document.
    ///
    /// The captured XML declaration and doctype are re-emitted according
    /// to `Options.svg`. A reference copy serializes as a `<use>` element
    /// pointing at its master instead.
    pub fn to_svg(&self, opt: &Options) -> String {
        if let Some(ref master) = self.master {
            return self.reference_svg(master);
        }

        let mut out = String::new();
        if opt.svg.xml_declaration {
            if let Some(ref decl) = self.declarations.xml_declaration {
                out.push_str(decl);
            }
        }
        if opt.svg.doctype_declaration {
            if let Some(ref doctype) = self.declarations.doctype {
                out.push_str(doctype);
            }
        }

        out.push_str(&writer::write_dom(&self.doc, &WriteOptions::default(), false));
        out
    }

    /// Serializes the shape for sprite embedding: no prolog and no
    /// namespace declarations, which a sprite declares once on its own
    /// root. A reference copy serializes as a `<use>` element pointing at
    /// its master instead.
    pub fn to_inline_svg(&self) -> String {
        if let Some(ref master) = self.master {
            return self.reference_svg(master);
        }

        writer::write_dom(&self.doc, &WriteOptions::default(), true)
    }

    fn reference_svg(&self, master: &str) -> String {
        let mut doc = Document::new();
        let use_node = doc.create_element(ElementId::Use);
        doc.set_id(use_node, self.id.as_str());
        doc.set_attribute(use_node, AttributeId::Href, format!("#{}", master));
        let root = doc.root();
        doc.append(root, use_node);

        writer::write_dom(&doc, &WriteOptions::default(), true)
    }
}

/// Reads and removes a dimension attribute from the root element.
fn take_dimension(doc: &mut Document, svg: NodeId, aid: AttributeId) -> Result<Option<f64>, Error> {
    let value = match doc.get_attribute(svg, aid) {
        Some(text) => {
            let length = Length::from_str(text).map_err(|_| {
                Error::InvalidAttributeValue(format!("{} '{}'", aid.as_str(), text))
            })?;

            if length.unit == LengthUnit::Percent {
                return Err(Error::InvalidAttributeValue(
                    format!("{} '{}': a percentage is not a usable dimension", aid.as_str(), text),
                ));
            }

            if length.number < 0.0 {
                return Err(Error::InvalidAttributeValue(
                    format!("{} '{}': negative", aid.as_str(), text),
                ));
            }

            Some(length.number)
        }
        None => None,
    };

    doc.remove_attribute(svg, aid);
    Ok(value)
}
