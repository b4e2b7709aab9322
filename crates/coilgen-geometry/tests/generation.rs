use approx::assert_abs_diff_eq;
use coilgen_core::{Advisory, CoilError, CoilParameters, CoilType, Direction, Point2D, SegmentShape};
use coilgen_geometry::{generate, generate_spiral, generate_square};

fn arc_parts(shape: SegmentShape) -> (Point2D, Point2D, f64) {
    match shape {
        SegmentShape::Arc {
            center,
            start,
            sweep_deg,
        } => (center, start, sweep_deg),
        SegmentShape::Line { .. } => panic!("expected an arc"),
    }
}

fn spiral_params(direction: Direction) -> CoilParameters {
    CoilParameters::builder()
        .r_inner(2.0)
        .r_outer(10.0)
        .n_turns(4.0)
        .points_per_turn(4.0)
        .line_width(0.2)
        .direction(direction)
        .build()
        .unwrap()
}

#[test]
fn square_by_spacing_fills_thirty_one_turns() {
    let params = CoilParameters::builder()
        .r_inner(2.0)
        .r_outer(10.0)
        .spacing(0.128)
        .line_width(0.128)
        .coil_type(CoilType::Square)
        .build()
        .unwrap();
    let coil = generate(&params).unwrap();
    assert_eq!(coil.params.n_turns(), 31.0);
    assert_eq!(coil.path.segments().len(), 123);
    assert!(coil
        .advisories
        .iter()
        .any(|a| matches!(a, Advisory::TurnsTruncated { used: 31, .. })));
    assert_eq!(coil.path.start_point(), Point2D::new(-10.0, -10.0));
}

#[test]
fn spiral_four_turns_four_points() {
    let coil = generate_spiral(&spiral_params(Direction::CounterClockwise)).unwrap();
    assert_eq!(coil.path.segments().len(), 16);
    assert_abs_diff_eq!(coil.path.start_point().radius(), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(coil.path.end_point().radius(), 10.0, epsilon = 1e-9);
    for seg in coil.path.segments() {
        let (center, _, sweep) = arc_parts(seg.shape);
        assert!(center.is_finite());
        assert!(sweep > 0.0 && sweep < 180.0, "sweep {sweep}");
        assert_eq!(seg.width, 0.2);
        assert_eq!(seg.layer, "F.Cu");
    }
}

#[test]
fn spiral_arcs_are_contiguous() {
    let coil = generate_spiral(&spiral_params(Direction::CounterClockwise)).unwrap();
    let segments = coil.path.segments();
    for pair in segments.windows(2) {
        let end = pair[0].end();
        let next = pair[1].start();
        assert_abs_diff_eq!(end.x, next.x, epsilon = 1e-7);
        assert_abs_diff_eq!(end.y, next.y, epsilon = 1e-7);
    }
    let last = segments.last().unwrap().end();
    assert_abs_diff_eq!(last.x, coil.path.end_point().x, epsilon = 1e-7);
    assert_abs_diff_eq!(last.y, coil.path.end_point().y, epsilon = 1e-7);
}

#[test]
fn clockwise_spiral_mirrors_counter_clockwise() {
    let ccw = generate_spiral(&spiral_params(Direction::CounterClockwise)).unwrap();
    let cw = generate_spiral(&spiral_params(Direction::Clockwise)).unwrap();
    assert_eq!(ccw.path.segments().len(), cw.path.segments().len());

    for (a, b) in ccw.path.segments().iter().zip(cw.path.segments()) {
        let (ca, sa, wa) = arc_parts(a.shape);
        let (cb, sb, wb) = arc_parts(b.shape);
        assert_abs_diff_eq!(ca.x, cb.x, epsilon = 1e-9);
        assert_abs_diff_eq!(ca.y, -cb.y, epsilon = 1e-9);
        assert_abs_diff_eq!(sa.x, sb.x, epsilon = 1e-9);
        assert_abs_diff_eq!(sa.y, -sb.y, epsilon = 1e-9);
        assert_abs_diff_eq!(wa, -wb, epsilon = 1e-9);
        assert_abs_diff_eq!(sa.radius(), sb.radius(), epsilon = 1e-9);
    }
    let (e1, e2) = (ccw.path.end_point(), cw.path.end_point());
    assert_abs_diff_eq!(e1.x, e2.x, epsilon = 1e-9);
    assert_abs_diff_eq!(e1.y, -e2.y, epsilon = 1e-9);
}

#[test]
fn fractional_spiral_closes_with_short_arc() {
    let params = CoilParameters::builder()
        .r_inner(1.0)
        .r_outer(4.0)
        .n_turns(2.3)
        .points_per_turn(8.0)
        .line_width(0.2)
        .build()
        .unwrap();
    let coil = generate_spiral(&params).unwrap();
    // 828 degrees: 18 full 45 degree steps and one of 18 degrees.
    assert_eq!(coil.path.segments().len(), 19);
    let (_, _, last_sweep) = arc_parts(coil.path.segments()[18].shape);
    assert!(last_sweep > 0.0 && last_sweep < 45.0, "sweep {last_sweep}");
    assert_abs_diff_eq!(coil.path.end_point().radius(), 4.0, epsilon = 1e-9);
    assert!(coil.path.end_point().x < 0.0);
}

#[test]
fn single_turn_square_keeps_an_open_ring() {
    let params = CoilParameters::builder()
        .r_inner(1.0)
        .r_outer(3.0)
        .n_turns(1.0)
        .line_width(0.25)
        .build()
        .unwrap();
    let coil = generate_square(&params).unwrap();
    assert_eq!(coil.path.segments().len(), 3);
    assert_eq!(coil.path.start_point(), Point2D::new(-3.0, -3.0));
    assert_eq!(coil.path.end_point(), Point2D::new(3.0, -2.5));
    assert_abs_diff_eq!(coil.params.spacing(), 0.25, epsilon = 1e-12);
}

#[test]
fn fractional_square_turns_are_truncated_and_reported() {
    let params = CoilParameters::builder()
        .r_inner(1.0)
        .r_outer(6.0)
        .n_turns(5.7)
        .line_width(0.25)
        .build()
        .unwrap();
    let coil = generate_square(&params).unwrap();
    assert_eq!(coil.params.n_turns(), 5.0);
    assert_eq!(coil.path.segments().len(), 19);
    assert_eq!(
        coil.advisories,
        vec![Advisory::TurnsTruncated {
            requested: 5.7,
            used: 5
        }]
    );
}

#[test]
fn generate_dispatches_on_coil_type() {
    let square = CoilParameters::builder()
        .r_inner(2.0)
        .r_outer(10.0)
        .n_turns(4.0)
        .line_width(0.2)
        .coil_type(CoilType::Square)
        .build()
        .unwrap();
    let coil = generate(&square).unwrap();
    assert!(coil
        .path
        .segments()
        .iter()
        .all(|s| matches!(s.shape, SegmentShape::Line { .. })));

    let spiral = spiral_params(Direction::CounterClockwise);
    let coil = generate(&spiral).unwrap();
    assert!(coil
        .path
        .segments()
        .iter()
        .all(|s| matches!(s.shape, SegmentShape::Arc { .. })));
}

#[test]
fn missing_turns_and_spacing_fails_before_generating() {
    let params = CoilParameters::builder()
        .r_inner(2.0)
        .r_outer(10.0)
        .line_width(0.2)
        .build()
        .unwrap();
    assert!(matches!(
        generate_spiral(&params),
        Err(CoilError::InvalidGeometry { .. })
    ));
    assert!(matches!(
        generate_square(&params),
        Err(CoilError::InvalidGeometry { .. })
    ));
}

#[test]
fn overlapping_turns_still_generate_with_advisory() {
    let params = CoilParameters::builder()
        .r_inner(2.0)
        .r_outer(3.0)
        .n_turns(10.0)
        .line_width(0.2)
        .coil_type(CoilType::Square)
        .build()
        .unwrap();
    let coil = generate(&params).unwrap();
    assert_eq!(coil.path.segments().len(), 39);
    assert!(coil
        .advisories
        .iter()
        .any(|a| matches!(a, Advisory::NonPositiveSpacing { .. })));
}

#[test]
fn coil_serializes_for_downstream_tools() {
    let coil = generate_spiral(&spiral_params(Direction::CounterClockwise)).unwrap();
    let json = serde_json::to_value(&coil).unwrap();
    assert_eq!(json["path"]["segments"].as_array().unwrap().len(), 16);
    assert_eq!(json["params"]["n_turns"], 4.0);
}

#[test]
fn oversampled_spiral_is_rejected_not_allocated() {
    let params = CoilParameters::builder()
        .r_inner(2.0)
        .r_outer(10.0)
        .n_turns(1.0)
        .points_per_turn(1e18)
        .line_width(0.2)
        .build()
        .unwrap();
    let err = generate_spiral(&params).unwrap_err();
    assert!(matches!(err, CoilError::InvalidGeometry { .. }));
}

#[test]
fn tiny_pitch_square_is_rejected_not_allocated() {
    let params = CoilParameters::builder()
        .r_inner(2.0)
        .r_outer(10.0)
        .spacing(-0.2 + 1e-9)
        .line_width(0.2)
        .coil_type(CoilType::Square)
        .build()
        .unwrap();
    assert!(generate_square(&params).is_err());
}

#[test]
fn every_spiral_turn_stays_curved_at_the_lowest_sampling() {
    let params = CoilParameters::builder()
        .r_inner(2.0)
        .r_outer(10.0)
        .n_turns(4.0)
        .points_per_turn(2.5)
        .line_width(0.2)
        .build()
        .unwrap();
    let coil = generate_spiral(&params).unwrap();
    assert_eq!(coil.path.segments().len(), 10);
    for seg in coil.path.segments() {
        let (_, _, sweep) = arc_parts(seg.shape);
        assert!(sweep > 0.0 && sweep < 180.0, "sweep {sweep}");
    }
}
