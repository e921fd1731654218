use super::*;
use crate::foundation::core::BrushSize;

fn white_source() -> DynamicImage {
    DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        16,
        9,
        image::Rgba([255, 255, 255, 255]),
    ))
}

fn small_canvas() -> Canvas {
    Canvas::new(64, 36).unwrap()
}

fn line(y: f64, x0: f64, x1: f64, brush: f64) -> Stroke {
    let b = BrushSize::new(brush);
    Stroke::new(vec![
        SamplePoint::new(Point::new(x0, y), b),
        SamplePoint::new(Point::new(x1, y), b),
    ])
    .unwrap()
}

fn close(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= 2
}

#[test]
fn fresh_compositor_shows_the_scaled_source() {
    let c = Compositor::new(&white_source(), small_canvas()).unwrap();
    assert_eq!(c.width(), 64);
    assert_eq!(c.height(), 36);
    assert_eq!(c.buffer(), c.base());
    assert_eq!(c.pixel(0, 0).unwrap().to_array(), [255, 255, 255, 255]);
    assert!(c.pixel(64, 0).is_none());
}

#[test]
fn stroke_tints_covered_pixels_translucent_red() {
    let mut c = Compositor::new(&white_source(), small_canvas()).unwrap();
    c.redraw(&[line(18.0, 10.0, 54.0, 12.0)]).unwrap();

    let px = c.pixel(32, 18).unwrap();
    assert_eq!(px.r, 255);
    assert!(close(px.g, 127), "g = {}", px.g);
    assert!(close(px.b, 127), "b = {}", px.b);
    assert_eq!(px.a, 255);

    // Far from the stroke nothing changes.
    assert_eq!(c.pixel(32, 2).unwrap().to_array(), [255, 255, 255, 255]);
}

#[test]
fn round_caps_extend_past_the_endpoints() {
    let mut c = Compositor::new(&white_source(), small_canvas()).unwrap();
    c.redraw(&[line(18.0, 20.0, 40.0, 16.0)]).unwrap();
    // Inside the cap radius beyond the last point.
    assert!(c.pixel(44, 18).unwrap().g < 200);
    // Beyond the cap radius.
    assert_eq!(c.pixel(52, 18).unwrap().g, 255);
}

#[test]
fn width_follows_the_first_sample() {
    let mut c = Compositor::new(&white_source(), small_canvas()).unwrap();
    let stroke = Stroke::new(vec![
        SamplePoint::new(Point::new(10.0, 18.0), BrushSize::new(10.0)),
        SamplePoint::new(Point::new(54.0, 18.0), BrushSize::new(30.0)),
    ])
    .unwrap();
    c.redraw(&[stroke]).unwrap();
    assert!(c.pixel(32, 18).unwrap().g < 200);
    // Width 30 would reach y = 28; width 10 stops at y = 23.
    assert_eq!(c.pixel(32, 27).unwrap().g, 255);
}

#[test]
fn later_strokes_composite_over_earlier_ones() {
    let mut c = Compositor::new(&white_source(), small_canvas()).unwrap();
    c.redraw(&[line(18.0, 4.0, 60.0, 12.0), line(18.0, 4.0, 60.0, 12.0)])
        .unwrap();
    let px = c.pixel(32, 18).unwrap();
    assert!(close(px.g, 63), "g = {}", px.g);
}

#[test]
fn single_point_stroke_renders_a_dab() {
    let mut c = Compositor::new(&white_source(), small_canvas()).unwrap();
    let dab = Stroke::new(vec![SamplePoint::new(
        Point::new(32.0, 18.0),
        BrushSize::new(12.0),
    )])
    .unwrap();
    c.redraw(&[dab]).unwrap();
    assert!(c.pixel(32, 18).unwrap().g < 200);
    assert_eq!(c.pixel(32, 30).unwrap().g, 255);
}

#[test]
fn redraw_is_idempotent() {
    let strokes = vec![line(10.0, 5.0, 50.0, 14.0), line(25.0, 50.0, 5.0, 22.0)];
    let mut c = Compositor::new(&white_source(), small_canvas()).unwrap();

    c.redraw(&strokes).unwrap();
    let first = c.buffer().to_vec();
    let first_digest = c.digest();

    c.redraw(&strokes).unwrap();
    assert_eq!(c.buffer(), first.as_slice());
    assert_eq!(c.digest(), first_digest);
}

#[test]
fn redraw_with_no_strokes_restores_the_source() {
    let mut c = Compositor::new(&white_source(), small_canvas()).unwrap();
    let clean = c.digest();
    c.redraw(&[line(18.0, 10.0, 54.0, 12.0)]).unwrap();
    assert_ne!(c.digest(), clean);
    c.redraw(&[]).unwrap();
    assert_eq!(c.digest(), clean);
    assert_eq!(c.buffer(), c.base());
}

#[test]
fn redraw_upto_uses_the_timeline_prefix() {
    let mut t = Timeline::new();
    t.append(line(10.0, 5.0, 60.0, 8.0));
    t.append(line(26.0, 5.0, 60.0, 8.0));

    let mut c = Compositor::new(&white_source(), small_canvas()).unwrap();
    c.redraw_upto(&t, Some(0)).unwrap();
    assert!(c.pixel(32, 10).unwrap().g < 200);
    assert_eq!(c.pixel(32, 26).unwrap().g, 255);

    c.redraw_upto(&t, None).unwrap();
    assert_eq!(c.buffer(), c.base());
}

#[test]
fn live_segment_is_replaced_by_the_next_redraw() {
    let mut c = Compositor::new(&white_source(), small_canvas()).unwrap();
    c.draw_segment(&Segment {
        from: Point::new(10.0, 18.0),
        to: Point::new(30.0, 18.0),
        width: BrushSize::new(10.0),
    })
    .unwrap();
    assert!(c.pixel(20, 18).unwrap().g < 200);

    c.redraw(&[]).unwrap();
    assert_eq!(c.pixel(20, 18).unwrap().g, 255);
}

#[test]
fn straight_copy_matches_opaque_buffer() {
    let mut c = Compositor::new(&white_source(), small_canvas()).unwrap();
    c.redraw(&[line(18.0, 10.0, 54.0, 12.0)]).unwrap();
    let img = c.to_rgba_image().unwrap();
    assert_eq!(img.dimensions(), (64, 36));
    assert_eq!(img.as_raw().as_slice(), c.buffer());
}
