use masonry_grid_core::error::MasonryError;
use masonry_grid_core::prelude::*;

fn counting(calls: &mut usize) -> impl FnMut(usize, f64) -> ItemMeasurement + '_ {
    move |_: usize, _: f64| {
        *calls += 1;
        ItemMeasurement::new(10.0, 0.0)
    }
}

#[test]
fn zero_columns_rejected_without_measuring() {
    let mut calls = 0;
    let params = LayoutParameters::new(0, 0.0, 200.0);
    let result = compute_layout(5, &params, &mut counting(&mut calls));
    match result {
        Err(MasonryError::InvalidParameters(msg)) => assert!(msg.contains("column_count")),
        other => panic!("Expected InvalidParameters error, got {:?}", other),
    }
    assert_eq!(calls, 0);
}

#[test]
fn zero_width_rejected_without_measuring() {
    let mut calls = 0;
    let params = LayoutParameters::new(2, 0.0, 0.0);
    let result = compute_layout(5, &params, &mut counting(&mut calls));
    assert!(matches!(result, Err(MasonryError::InvalidParameters(_))));
    assert_eq!(calls, 0);
}

#[test]
fn negative_and_nan_widths_rejected() {
    for w in [-10.0, f64::NAN, f64::INFINITY] {
        let params = LayoutParameters::new(2, 0.0, w);
        assert!(matches!(
            params.validate(),
            Err(MasonryError::InvalidParameters(_))
        ));
    }
}

#[test]
fn negative_padding_rejected() {
    let params = LayoutParameters::new(2, -1.0, 200.0);
    assert!(matches!(
        params.validate(),
        Err(MasonryError::InvalidParameters(_))
    ));
}

#[test]
fn padding_wider_than_column_still_lays_out() {
    let params = LayoutParameters::new(1, 60.0, 100.0);
    let mut widths = Vec::new();
    let out = compute_layout(2, &params, &mut |_: usize, w: f64| {
        widths.push(w);
        ItemMeasurement::new(10.0, 0.0)
    })
    .expect("layout");
    assert_eq!(widths, vec![-20.0, -20.0]);
    assert_eq!(out.len(), 2);
    assert_eq!(out.placements[0].frame, Rect::new(60.0, 60.0, 0.0, 10.0));
    assert_eq!(out.placements[1].frame, Rect::new(60.0, 190.0, 0.0, 10.0));
    assert_eq!(out.content_height, 260.0);
}

#[test]
fn negative_height_fails_whole_pass() {
    let params = LayoutParameters::new(2, 0.0, 200.0);
    let result = compute_layout(4, &params, &mut |i: usize, _: f64| {
        if i == 2 {
            ItemMeasurement::new(10.0, -1.0)
        } else {
            ItemMeasurement::new(10.0, 0.0)
        }
    });
    match result {
        Err(MasonryError::InvalidMeasurement {
            index,
            primary_height,
            annotation_height,
        }) => {
            assert_eq!(index, 2);
            assert_eq!(primary_height, 10.0);
            assert_eq!(annotation_height, -1.0);
        }
        other => panic!("Expected InvalidMeasurement error, got {:?}", other),
    }
}

#[test]
fn failed_first_pass_leaves_session_unprepared() {
    let params = LayoutParameters::new(2, 0.0, 200.0);
    let mut sess = LayoutSession::new(params, 3, |_: usize, _: f64| {
        ItemMeasurement::new(-5.0, 0.0)
    });
    assert!(sess.prepare().is_err());
    assert!(!sess.is_prepared());
    assert!(sess.cached().is_none());
}

struct Heights(Vec<f64>);

impl Measure for Heights {
    fn measure(&mut self, index: usize, _width: f64) -> ItemMeasurement {
        ItemMeasurement::new(self.0[index], 0.0)
    }
}

#[test]
fn failed_forced_pass_keeps_prior_layout() {
    let params = LayoutParameters::new(2, 0.0, 200.0);
    let mut sess = LayoutSession::new(params, 3, Heights(vec![10.0, 20.0, 30.0]));
    let before = sess.prepare().expect("first pass").clone();

    sess.measure_mut().0[1] = -1.0;
    assert!(sess.force_prepare().is_err());
    assert!(sess.is_prepared());
    assert_eq!(sess.cached(), Some(&before));

    // A plain prepare serves the cache and does not measure again.
    assert_eq!(sess.prepare().expect("cached"), &before);
}
