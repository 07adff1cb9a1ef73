// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;
use std::fmt;

use crate::{AlignRule, BoxSizing, Padding};

/// The id-from-name strategy.
///
/// Both variants honor the same contract: raw shape name in, id string out.
pub enum IdGenerator {
    /// A template where every `%s` is substituted with the cleaned-up name:
    /// path separators replaced by [`IdOptions::separator`], whitespace by
    /// [`IdOptions::whitespace`], and a trailing `.svg` stripped.
    ///
    /// [`IdOptions::separator`]: struct.IdOptions.html#structfield.separator
    /// [`IdOptions::whitespace`]: struct.IdOptions.html#structfield.whitespace
    Template(String),
    /// A custom callback receiving the raw name.
    Custom(Box<dyn Fn(&str) -> String>),
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IdGenerator::Template(ref t) => write!(f, "Template({})", t),
            IdGenerator::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::Template("%s".to_string())
    }
}

/// Options that define shape id derivation.
#[derive(Debug)]
pub struct IdOptions {
    /// Join token replacing directory separators in the shape name.
    ///
    /// Default: `--`
    pub separator: String,

    /// Pseudo-state delimiter inside an id.
    ///
    /// The id part after the delimiter names a CSS pseudo-class variant,
    /// e.g. `icon--home~hover`.
    ///
    /// Default: `~`
    pub pseudo: String,

    /// Replacement for whitespace in the shape name.
    ///
    /// Default: `_`
    pub whitespace: String,

    /// The id generator.
    pub generator: IdGenerator,
}

impl Default for IdOptions {
    fn default() -> Self {
        IdOptions {
            separator: "--".to_string(),
            pseudo: "~".to_string(),
            whitespace: "_".to_string(),
            generator: IdGenerator::default(),
        }
    }
}

impl IdOptions {
    /// Produces a shape id from a path-like name.
    pub fn generate(&self, name: &str) -> String {
        match self.generator {
            IdGenerator::Template(ref template) => {
                let stem = name.strip_suffix(".svg").unwrap_or(name);
                let mut cleaned = String::with_capacity(stem.len());
                for c in stem.chars() {
                    if c == '/' || c == '\\' {
                        cleaned.push_str(&self.separator);
                    } else if c.is_whitespace() {
                        cleaned.push_str(&self.whitespace);
                    } else {
                        cleaned.push(c);
                    }
                }

                template.replace("%s", &cleaned)
            }
            IdGenerator::Custom(ref f) => f(name),
        }
    }
}

/// Options that define dimension limiting.
#[derive(Clone, Copy, Debug)]
pub struct DimensionOptions {
    /// The maximum effective shape width. Default: 2000
    pub max_width: f64,
    /// The maximum effective shape height. Default: 2000
    pub max_height: f64,
    /// Decimal places kept in emitted dimensions and viewBox
    /// coordinates. Default: 2
    pub precision: u8,
    /// Whether `width`/`height` attributes are kept on the root element.
    ///
    /// Default: false
    pub attributes: bool,
}

impl Default for DimensionOptions {
    fn default() -> Self {
        DimensionOptions {
            max_width: 2000.0,
            max_height: 2000.0,
            precision: 2,
            attributes: false,
        }
    }
}

/// Options that define padding around or inside a shape.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpacingOptions {
    /// Four-sided padding in final output units. Default: zero
    pub padding: Padding,
    /// The box model the padding follows. Default: `Content`
    pub box_sizing: BoxSizing,
}

/// Accessibility metadata attached to a shape during normalization.
#[derive(Clone, Debug, Default)]
pub struct Meta {
    /// Shape title text.
    pub title: Option<String>,
    /// Shape description text.
    pub description: Option<String>,
}

/// Options that define the final serialization.
#[derive(Clone, Copy, Debug)]
pub struct SvgOptions {
    /// Re-emit the captured XML declaration on standalone output.
    ///
    /// Default: true
    pub xml_declaration: bool,
    /// Re-emit the captured doctype on standalone output.
    ///
    /// Default: true
    pub doctype_declaration: bool,
    /// Whether namespace operations are active at all.
    ///
    /// Default: true
    pub namespace_ids: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            xml_declaration: true,
            doctype_declaration: true,
            namespace_ids: true,
        }
    }
}

/// Shape processing configuration.
///
/// Read-only after construction. One `Options` value is shared by all
/// shapes of a processing run.
#[derive(Debug, Default)]
pub struct Options {
    /// Id derivation options.
    pub id: IdOptions,
    /// Dimension limiting options.
    pub dimension: DimensionOptions,
    /// Padding options.
    pub spacing: SpacingOptions,
    /// Title/description metadata, keyed by shape id or base name.
    pub meta: HashMap<String, Meta>,
    /// Distribution rules, keyed by shape id or base name.
    /// The `*` entry applies to every shape without its own entry.
    pub align: HashMap<String, Vec<AlignRule>>,
    /// Serialization options.
    pub svg: SvgOptions,
}
