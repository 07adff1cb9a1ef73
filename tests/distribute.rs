// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use pretty_assertions::assert_eq;

use svgshape::{AlignRule, Options, Shape};

const SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24'/>";

fn aligned_options(key: &str, rules: Vec<AlignRule>) -> Options {
    let mut opt = Options::default();
    opt.align.insert(key.to_string(), rules);
    opt
}

#[test]
fn no_rules_yields_the_shape_itself() {
    let opt = Options::default();
    let shape = Shape::new("icon.svg", SVG, &opt).unwrap();

    let shapes = shape.distribute(&opt);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].id(), "icon");
    assert_eq!(shapes[0].master(), None);
    assert_eq!(shapes[0].copy_count(), 0);
    assert_eq!(shapes[0].align(), 0.0);
}

#[test]
fn three_rules_yield_master_and_two_copies() {
    let opt = aligned_options("icon", vec![
        AlignRule::new("%s", 0.0),
        AlignRule::new("%s-center", 0.5),
        AlignRule::new("%s-right", 1.0),
    ]);
    let shape = Shape::new("icon.svg", SVG, &opt).unwrap();

    let shapes = shape.distribute(&opt);
    assert_eq!(shapes.len(), 3);

    assert_eq!(shapes[0].id(), "icon");
    assert_eq!(shapes[0].master(), None);
    assert_eq!(shapes[0].copy_count(), 2);

    assert_eq!(shapes[1].id(), "icon-center");
    assert_eq!(shapes[1].master(), Some("icon"));
    assert_eq!(shapes[1].align(), 0.5);
    assert_eq!(shapes[1].copy_count(), 0);

    assert_eq!(shapes[2].id(), "icon-right");
    assert_eq!(shapes[2].master(), Some("icon"));
    assert_eq!(shapes[2].align(), 1.0);
}

#[test]
fn first_rule_renames_the_master() {
    let opt = aligned_options("icon", vec![
        AlignRule::new("%s-left", 0.0),
        AlignRule::new("%s-right", 1.0),
    ]);
    let shape = Shape::new("icon.svg", SVG, &opt).unwrap();

    let shapes = shape.distribute(&opt);
    assert_eq!(shapes[0].id(), "icon-left");
    assert_eq!(shapes[1].id(), "icon-left-right");
    assert_eq!(shapes[1].master(), Some("icon-left"));
}

#[test]
fn pseudo_state_survives_renaming() {
    let opt = aligned_options("icon", vec![
        AlignRule::new("%s", 0.0),
        AlignRule::new("%s-right", 1.0),
    ]);
    let shape = Shape::new("icon~hover.svg", SVG, &opt).unwrap();
    assert_eq!(shape.base(), "icon");

    let shapes = shape.distribute(&opt);
    assert_eq!(shapes[0].id(), "icon~hover");
    assert_eq!(shapes[1].id(), "icon-right~hover");
    assert_eq!(shapes[1].base(), "icon-right");
    assert_eq!(shapes[1].state(), Some("hover"));
}

#[test]
fn copies_serialize_as_references() {
    let opt = aligned_options("icon", vec![
        AlignRule::new("%s", 0.0),
        AlignRule::new("%s-right", 1.0),
    ]);
    let mut shape = Shape::new("icon.svg", SVG, &opt).unwrap();
    shape.complement(&opt).unwrap();

    let shapes = shape.distribute(&opt);

    assert_eq!(
        shapes[1].to_svg(&opt),
        "<use id=\"icon-right\" xlink:href=\"#icon\"/>"
    );
    assert_eq!(shapes[1].to_inline_svg(), shapes[1].to_svg(&opt));

    // The master keeps its drawable content.
    assert_eq!(
        shapes[0].to_inline_svg(),
        "<svg viewBox=\"0 0 24 24\"/>"
    );
}

#[test]
fn wildcard_rules_apply_to_every_shape() {
    let opt = aligned_options("*", vec![
        AlignRule::new("%s", 0.0),
        AlignRule::new("%s-alt", 1.0),
    ]);

    for name in &["a.svg", "b.svg"] {
        let shape = Shape::new(name, SVG, &opt).unwrap();
        let shapes = shape.distribute(&opt);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[1].master(), Some(shapes[0].id()));
    }
}
