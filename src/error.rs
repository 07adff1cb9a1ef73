// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;

/// Shape processing errors.
#[derive(Debug)]
pub enum Error {
    /// Parsed document must have an `svg` root element.
    NoSvgElement,

    /// A `roxmltree` error.
    XmlParse(roxmltree::Error),

    /// An attribute value that cannot be interpreted: a malformed
    /// dimension or viewBox, a negative or percentage dimension.
    InvalidAttributeValue(String),

    /// The shape declares neither usable dimensions nor a viewBox, so
    /// its geometry cannot be established. Carries the shape name.
    MissingGeometry(String),

    /// An operation was requested on a shape in the wrong state, e.g.
    /// namespacing a shape that was never complemented.
    NotPermitted(&'static str),

    /// Selector text inside a `<style>` element cannot be parsed.
    InvalidCss(simplecss::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NoSvgElement => {
                write!(f, "the document does not have an SVG element")
            }
            Error::XmlParse(ref e) => {
                write!(f, "{}", e)
            }
            Error::InvalidAttributeValue(ref s) => {
                write!(f, "invalid attribute value: {}", s)
            }
            Error::MissingGeometry(ref name) => {
                write!(f, "shape '{}' has no usable width/height or viewBox", name)
            }
            Error::NotPermitted(s) => {
                write!(f, "operation not permitted: {}", s)
            }
            Error::InvalidCss(ref e) => {
                write!(f, "invalid CSS: {:?}", e)
            }
        }
    }
}

impl error::Error for Error {
    fn description(&self) -> &str {
        "a shape processing error"
    }
}

impl From<roxmltree::Error> for Error {
    fn from(value: roxmltree::Error) -> Self {
        Error::XmlParse(value)
    }
}

impl From<simplecss::Error> for Error {
    fn from(value: simplecss::Error) -> Self {
        Error::InvalidCss(value)
    }
}
