// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use pretty_assertions::assert_eq;

use svgshape::{Error, IdGenerator, Meta, Options, Shape};

const SVG_24: &str =
    "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24'><path d='M0 0'/></svg>";

#[test]
fn id_from_path_name() {
    let opt = Options::default();
    let shape = Shape::new("icons/home.svg", SVG_24, &opt).unwrap();

    assert_eq!(shape.id(), "icons--home");
    assert_eq!(shape.base(), "icons--home");
    assert_eq!(shape.state(), None);
    assert_eq!(shape.name(), "icons/home.svg");
}

#[test]
fn id_whitespace_and_backslash() {
    let opt = Options::default();
    let shape = Shape::new("my icons\\home.svg", SVG_24, &opt).unwrap();

    assert_eq!(shape.id(), "my_icons--home");
}

#[test]
fn id_template_generator() {
    let mut opt = Options::default();
    opt.id.generator = IdGenerator::Template("icon-%s".to_string());

    let shape = Shape::new("home.svg", SVG_24, &opt).unwrap();
    assert_eq!(shape.id(), "icon-home");
}

#[test]
fn id_custom_generator() {
    let mut opt = Options::default();
    opt.id.generator = IdGenerator::Custom(Box::new(|name| {
        name.to_uppercase()
    }));

    let shape = Shape::new("home", SVG_24, &opt).unwrap();
    assert_eq!(shape.id(), "HOME");
}

#[test]
fn pseudo_state_split() {
    let opt = Options::default();
    let shape = Shape::new("home~hover.svg", SVG_24, &opt).unwrap();

    assert_eq!(shape.id(), "home~hover");
    assert_eq!(shape.base(), "home");
    assert_eq!(shape.state(), Some("hover"));
}

#[test]
fn not_an_svg_document() {
    let opt = Options::default();
    let res = Shape::new("a.svg", "<html xmlns='http://www.w3.org/1999/xhtml'/>", &opt);
    assert!(matches!(res, Err(Error::NoSvgElement)));
}

#[test]
fn malformed_markup() {
    let opt = Options::default();
    let res = Shape::new("a.svg", "<svg", &opt);
    assert!(matches!(res, Err(Error::XmlParse(_))));
}

#[test]
fn negative_dimension_is_rejected() {
    let opt = Options::default();
    let res = Shape::new("a.svg", "<svg xmlns='http://www.w3.org/2000/svg' width='-5'/>", &opt);
    match res {
        Err(Error::InvalidAttributeValue(msg)) => assert!(msg.starts_with("width '-5'")),
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
}

#[test]
fn percent_dimension_is_rejected() {
    let opt = Options::default();
    let res = Shape::new("a.svg", "<svg xmlns='http://www.w3.org/2000/svg' height='100%'/>", &opt);
    match res {
        Err(Error::InvalidAttributeValue(msg)) => assert!(msg.starts_with("height '100%'")),
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
}

#[test]
fn malformed_view_box_is_rejected() {
    let opt = Options::default();
    let res = Shape::new("a.svg", "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 a b'/>", &opt);
    assert!(matches!(res, Err(Error::InvalidAttributeValue(_))));
}

#[test]
fn missing_geometry_is_an_error() {
    let opt = Options::default();
    let mut shape = Shape::new("a.svg", "<svg xmlns='http://www.w3.org/2000/svg'/>", &opt).unwrap();

    let res = shape.complement(&opt);
    assert!(matches!(res, Err(Error::MissingGeometry(_))));
    assert!(!shape.is_ready());
}

#[test]
fn dimensions_from_view_box() {
    let opt = Options::default();
    let mut shape = Shape::new(
        "a.svg",
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 16'/>",
        &opt,
    ).unwrap();

    shape.complement(&opt).unwrap();
    assert_eq!(shape.width(), Some(24.0));
    assert_eq!(shape.height(), Some(16.0));
}

#[test]
fn view_box_is_synthesized_and_cached() {
    let opt = Options::default();
    let mut shape = Shape::new("a.svg", SVG_24, &opt).unwrap();

    let vb = shape.view_box().unwrap();
    assert_eq!((vb.x, vb.y, vb.w, vb.h), (0.0, 0.0, 24.0, 24.0));
}

#[test]
fn complement_drops_dimension_attributes_by_default() {
    let opt = Options::default();
    let mut shape = Shape::new("a.svg", SVG_24, &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert_eq!(
        shape.to_svg(&opt),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">\
         <path d=\"M0 0\"/></svg>"
    );
}

#[test]
fn complement_keeps_dimension_attributes_on_demand() {
    let mut opt = Options::default();
    opt.dimension.attributes = true;

    let mut shape = Shape::new("a.svg", SVG_24, &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert_eq!(
        shape.to_svg(&opt),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" \
         viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>"
    );
}

#[test]
fn description_meta_injection() {
    let mut opt = Options::default();
    opt.meta.insert("icon-a".to_string(), Meta {
        title: None,
        description: Some("A circle".to_string()),
    });

    let mut shape = Shape::new("icon-a.svg", SVG_24, &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert_eq!(
        shape.to_svg(&opt),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" \
         aria-labelledby=\"icon-a-desc\">\
         <desc id=\"icon-a-desc\">A circle</desc>\
         <path d=\"M0 0\"/></svg>"
    );
}

#[test]
fn title_and_description_meta_injection() {
    let mut opt = Options::default();
    opt.meta.insert("icon-a".to_string(), Meta {
        title: Some("Icon A".to_string()),
        description: Some("A circle".to_string()),
    });

    let mut shape = Shape::new("icon-a.svg", SVG_24, &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert_eq!(
        shape.to_svg(&opt),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" \
         aria-labelledby=\"icon-a-desc icon-a-title\">\
         <title id=\"icon-a-title\">Icon A</title>\
         <desc id=\"icon-a-desc\">A circle</desc>\
         <path d=\"M0 0\"/></svg>"
    );
}

#[test]
fn meta_lookup_by_base_name() {
    let mut opt = Options::default();
    opt.meta.insert("icon".to_string(), Meta {
        title: Some("Icon".to_string()),
        description: None,
    });

    let mut shape = Shape::new("icon~hover.svg", SVG_24, &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert!(shape.to_svg(&opt).contains("<title id=\"icon~hover-title\">Icon</title>"));
}

#[test]
fn existing_meta_elements_are_reused() {
    let mut opt = Options::default();
    opt.meta.insert("icon-a".to_string(), Meta {
        title: Some("New title".to_string()),
        description: None,
    });

    let text = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24'>\
                <title>Old title</title><path d='M0 0'/></svg>";
    let mut shape = Shape::new("icon-a.svg", text, &opt).unwrap();
    shape.complement(&opt).unwrap();

    let out = shape.to_svg(&opt);
    assert!(out.contains("<title id=\"icon-a-title\">New title</title>"));
    assert!(!out.contains("Old title"));
}

#[test]
fn stale_label_list_is_removed() {
    let opt = Options::default();
    let text = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' \
                aria-labelledby='gone'/>";
    let mut shape = Shape::new("a.svg", text, &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert!(!shape.to_svg(&opt).contains("aria-labelledby"));
}

#[test]
fn declarations_are_captured_and_gated() {
    let opt = Options::default();
    let text = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
                <!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \
                \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\
                <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\"/>";

    let mut shape = Shape::new("a.svg", text, &opt).unwrap();
    shape.complement(&opt).unwrap();

    let out = shape.to_svg(&opt);
    assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><!DOCTYPE svg"));

    let mut quiet = Options::default();
    quiet.svg.xml_declaration = false;
    quiet.svg.doctype_declaration = false;
    assert!(shape.to_svg(&quiet).starts_with("<svg"));
}

#[test]
fn inline_form_strips_namespace_declarations() {
    let opt = Options::default();
    let mut shape = Shape::new("a.svg", SVG_24, &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert_eq!(
        shape.to_inline_svg(),
        "<svg viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>"
    );
}

#[test]
fn comments_and_unknown_elements_survive() {
    let opt = Options::default();
    let text = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24'>\
                <!--note--><foo bar='baz'/></svg>";
    let mut shape = Shape::new("a.svg", text, &opt).unwrap();
    shape.complement(&opt).unwrap();

    let out = shape.to_svg(&opt);
    assert!(out.contains("<!--note-->"));
    assert!(out.contains("<foo bar=\"baz\"/>"));
}
