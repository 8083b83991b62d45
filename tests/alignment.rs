//! Public-API checks of the alignment engine and the primitives it builds on.
//!
//! Sweeps every alignment mask against both coordinate conventions and a
//! small grid of rect/container sizes, including degenerate ones.

use rectalign::*;

const ORIGINS: [CoordinateOrigin; 2] = [CoordinateOrigin::TopLeft, CoordinateOrigin::BottomLeft];

/// Every mask from `NONE` to `ALL`.
fn all_masks() -> impl Iterator<Item = Alignment> {
    (0..=Alignment::ALL.bits()).map(Alignment::from_bits_truncate)
}

fn sizes() -> Vec<Size> {
    vec![
        Size::new(10.0, 10.0),
        Size::new(0.0, 0.0),
        Size::new(33.5, 7.25),
        Size::new(250.0, 40.0),
        Size::new(-5.0, 12.0),
    ]
}

/// Expected origin computed axis by axis, written independently of the engine.
fn expected(rect: Rect, container: Rect, a: Alignment, origin: CoordinateOrigin) -> Point {
    // Far edges are measured with dimension magnitudes.
    let far_x = container.width().abs() - rect.width().abs();
    let far_y = container.height().abs() - rect.height().abs();

    let x = if a.contains(Alignment::RIGHT) {
        far_x
    } else if a.contains(Alignment::LEFT) {
        0.0
    } else {
        rect.x()
    };

    let (top, bottom) = match origin {
        CoordinateOrigin::TopLeft => (0.0, far_y),
        CoordinateOrigin::BottomLeft => (far_y, 0.0),
    };
    let y = if a.contains(Alignment::BOTTOM) {
        bottom
    } else if a.contains(Alignment::TOP) {
        top
    } else {
        rect.y()
    };

    Point::new(x, y)
}

#[test]
fn every_mask_matches_per_axis_model() {
    let mut failures = Vec::new();
    for origin in ORIGINS {
        for a in all_masks() {
            for inner in sizes() {
                for outer in sizes() {
                    let rect = Rect::from_parts(Point::new(3.5, -8.0), inner);
                    let container = Rect::from_parts(Point::new(17.0, 40.0), outer);
                    let got = align_in_rect(rect, container, a, origin);
                    let want = expected(rect, container, a, origin);
                    if got.origin != want || got.size != inner {
                        failures.push(format!("{a} {origin} {inner:?} in {outer:?}: got {got:?}, want {want:?}"));
                    }
                }
            }
        }
    }
    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn top_bottom_tie_goes_to_bottom() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0).align_in(
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Alignment::TOP | Alignment::BOTTOM,
        CoordinateOrigin::TopLeft,
    );
    assert_eq!(r.y(), 90.0);
}

#[test]
fn left_right_tie_goes_to_right() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0).align_in(
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Alignment::LEFT | Alignment::RIGHT,
        CoordinateOrigin::TopLeft,
    );
    assert_eq!(r.x(), 90.0);
}

#[test]
fn negative_size_aligns_by_magnitude() {
    let r = Rect::new(0.0, 0.0, -10.0, -10.0).align_in(
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Alignment::RIGHT | Alignment::BOTTOM,
        CoordinateOrigin::TopLeft,
    );
    assert_eq!(r, Rect::new(90.0, 90.0, -10.0, -10.0));
}

#[test]
fn top_inverts_with_origin() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(a.align_in(b, Alignment::TOP, CoordinateOrigin::TopLeft).y(), 0.0);
    assert_eq!(a.align_in(b, Alignment::TOP, CoordinateOrigin::BottomLeft).y(), 90.0);
}

#[test]
fn full_mask_is_bottom_right() {
    let a = Rect::new(1.0, 1.0, 10.0, 20.0);
    let b = Rect::new(0.0, 0.0, 100.0, 50.0);
    let tl = a.align_in(b, Alignment::ALL, CoordinateOrigin::TopLeft);
    let bl = a.align_in(b, Alignment::ALL, CoordinateOrigin::BottomLeft);
    assert_eq!(tl.origin, Point::new(90.0, 30.0));
    assert_eq!(bl.origin, Point::new(90.0, 0.0));
}

#[test]
fn empty_mask_leaves_rect_alone() {
    let a = Rect::new(-3.25, 99.5, 10.0, 20.0);
    for origin in ORIGINS {
        assert_eq!(a.align_in(Rect::ZERO, Alignment::NONE, origin), a);
    }
}

#[test]
fn center_of_is_integral() {
    for a in sizes() {
        for b in sizes() {
            let p = a.center_in(b);
            assert_eq!(p, p.integral(), "{a:?} in {b:?}");
        }
    }
    assert_eq!(
        Size::new(10.0, 10.0).center_in(Size::new(100.0, 50.0)),
        Point::new(45.0, 20.0)
    );
}

#[test]
fn scale_rect_normalizes_everything() {
    let r = Rect::new(1.2, 1.7, 10.0, 10.0).scale(2.0, 0.5);
    assert_eq!(r.size, Size::new(20.0, 5.0));
    assert_eq!(r.origin, Point::new(1.0, 2.0));
}

#[test]
fn center_then_align_composes() {
    // Center horizontally, pin to bottom in a y-up surface.
    let aligner = Aligner::new(CoordinateOrigin::BottomLeft);
    let b = Rect::new(0.0, 0.0, 200.0, 80.0);
    let a = Rect::new(0.0, 0.0, 50.0, 20.0).center_in(b);
    let r = aligner.align(a, b, Alignment::BOTTOM);
    assert_eq!(r, Rect::new(75.0, 0.0, 50.0, 20.0));
}

#[test]
fn aligner_from_config_text() {
    let origin: CoordinateOrigin = "top-left".parse().unwrap();
    let mask: Alignment = "bottom|left".parse().unwrap();
    let r = Aligner::new(origin).align(
        Rect::new(5.0, 5.0, 10.0, 10.0),
        Rect::new(0.0, 0.0, 100.0, 60.0),
        mask,
    );
    assert_eq!(r.origin, Point::new(0.0, 50.0));

    let err = "upper-left".parse::<CoordinateOrigin>().unwrap_err();
    assert_eq!(err, ParseError::UnknownOrigin);
}

#[test]
fn concurrent_calls_agree() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let origin = ORIGINS[i % 2];
                all_masks()
                    .map(|a| {
                        align_in_rect(
                            Rect::new(1.0, 2.0, 10.0, 10.0),
                            Rect::new(0.0, 0.0, 64.0, 48.0),
                            a,
                            origin,
                        )
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], results[2]);
    assert_eq!(results[1], results[3]);
}
