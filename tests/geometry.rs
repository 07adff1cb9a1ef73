// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use pretty_assertions::assert_eq;

use svgshape::{BoxSizing, Options, Padding, Shape};

fn svg(width: u32, height: u32) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{}' height='{}'/>",
        width, height,
    )
}

#[test]
fn downscale_to_maximum() {
    let mut opt = Options::default();
    opt.dimension.max_width = 80.0;
    opt.dimension.max_height = 80.0;

    let mut shape = Shape::new("a.svg", &svg(100, 50), &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert_eq!(shape.width(), Some(80.0));
    assert_eq!(shape.height(), Some(40.0));
    assert_eq!(shape.scale(), 0.8);

    // The viewBox captures the original coordinate system.
    let vb = shape.view_box().unwrap();
    assert_eq!((vb.x, vb.y, vb.w, vb.h), (0.0, 0.0, 100.0, 50.0));

    assert_eq!(
        shape.to_inline_svg(),
        "<svg viewBox=\"0 0 100 50\"/>"
    );
}

#[test]
fn no_downscale_below_maximum() {
    let opt = Options::default();

    let mut shape = Shape::new("a.svg", &svg(100, 50), &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert_eq!(shape.width(), Some(100.0));
    assert_eq!(shape.scale(), 1.0);
}

#[test]
fn padding_grows_dimensions_and_view_box() {
    let mut opt = Options::default();
    opt.spacing.padding = Padding::uniform(10.0);

    let mut shape = Shape::new("a.svg", &svg(100, 50), &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert_eq!(shape.width(), Some(120.0));
    assert_eq!(shape.height(), Some(70.0));

    let vb = shape.view_box().unwrap();
    assert_eq!((vb.x, vb.y, vb.w, vb.h), (-10.0, -10.0, 120.0, 70.0));

    assert_eq!(
        shape.to_inline_svg(),
        "<svg viewBox=\"-10 -10 120 70\"/>"
    );
}

#[test]
fn asymmetric_padding() {
    let mut opt = Options::default();
    opt.spacing.padding = Padding { top: 1.0, right: 2.0, bottom: 3.0, left: 4.0 };

    let mut shape = Shape::new("a.svg", &svg(100, 50), &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert_eq!(shape.width(), Some(106.0));
    assert_eq!(shape.height(), Some(54.0));

    let vb = shape.view_box().unwrap();
    assert_eq!((vb.x, vb.y, vb.w, vb.h), (-4.0, -1.0, 106.0, 54.0));
}

#[test]
fn padded_width_matches_scaled_content_plus_padding() {
    let mut opt = Options::default();
    opt.spacing.padding = Padding::uniform(10.0);
    opt.dimension.max_width = 100.0;
    opt.dimension.max_height = 100.0;

    let mut shape = Shape::new("a.svg", &svg(1000, 1000), &opt).unwrap();
    shape.complement(&opt).unwrap();

    // scale = (100 - 20) / 1000
    assert_eq!(shape.scale(), 0.08);
    assert_eq!(shape.width(), Some(1000.0 * 0.08 + 20.0));
    assert_eq!(shape.height(), Some(100.0));
}

#[test]
fn downscale_never_exceeds_maximum_with_padding() {
    let mut opt = Options::default();
    opt.spacing.padding = Padding::uniform(7.0);
    opt.dimension.max_width = 150.0;
    opt.dimension.max_height = 150.0;

    for (w, h) in &[(151, 151), (1000, 400), (400, 1000), (3000, 3000)] {
        let mut shape = Shape::new("a.svg", &svg(*w, *h), &opt).unwrap();
        shape.complement(&opt).unwrap();

        assert!(shape.width().unwrap() <= 150.0, "width for {}x{}", w, h);
        assert!(shape.height().unwrap() <= 150.0, "height for {}x{}", w, h);
    }
}

#[test]
fn padding_box_sizing_skips_padding_in_the_limit_check() {
    let mut opt = Options::default();
    opt.spacing.padding = Padding::uniform(10.0);
    opt.dimension.max_width = 100.0;
    opt.dimension.max_height = 100.0;
    opt.spacing.box_sizing = BoxSizing::Padding;

    // 90 + 20 would exceed the maximum under the content box model,
    // but the declared size alone does not.
    let mut shape = Shape::new("a.svg", &svg(90, 90), &opt).unwrap();
    shape.complement(&opt).unwrap();

    assert_eq!(shape.scale(), 1.0);
    assert_eq!(shape.width(), Some(110.0));
}

#[test]
fn padding_box_sizing_still_downscales_oversized_shapes() {
    let mut opt = Options::default();
    opt.spacing.padding = Padding::uniform(10.0);
    opt.dimension.max_width = 100.0;
    opt.dimension.max_height = 100.0;
    opt.spacing.box_sizing = BoxSizing::Padding;

    let mut shape = Shape::new("a.svg", &svg(200, 200), &opt).unwrap();
    shape.complement(&opt).unwrap();

    // scale = (100 - 20) / 200, padding re-added afterwards
    assert_eq!(shape.scale(), 0.4);
    assert_eq!(shape.width(), Some(100.0));
    assert_eq!(shape.height(), Some(100.0));
}

#[test]
fn precision_is_applied_to_emitted_numbers() {
    let mut opt = Options::default();
    opt.dimension.max_width = 100.0;
    opt.dimension.max_height = 100.0;
    opt.dimension.precision = 1;

    let mut shape = Shape::new("a.svg", &svg(300, 70), &opt).unwrap();
    shape.complement(&opt).unwrap();

    // 70 * (100/300) = 23.333..
    assert_eq!(shape.width(), Some(100.0));
    assert_eq!(shape.height(), Some(23.3));
    assert_eq!(
        shape.to_inline_svg(),
        "<svg viewBox=\"0 0 300 70\"/>"
    );
}
