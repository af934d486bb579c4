mod common;

use border_segments::angle::orientation_count;
use border_segments::segments::Heading;
use border_segments::{AngleSweep, Boundary, Dimension, GridPoint, Side, SweepOptions};
use common::brute_force::border_points;
use std::collections::{BTreeMap, HashSet};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, TAU};

fn inward_normal(side: Side) -> (f64, f64) {
    match side {
        Side::Right => (-1.0, 0.0),
        Side::Top => (0.0, -1.0),
        Side::Left => (1.0, 0.0),
        Side::Bottom => (0.0, 1.0),
    }
}

fn is_corner(dim: Dimension, p: GridPoint) -> bool {
    let (w, h) = (dim.width() as i32, dim.height() as i32);
    (p.x == 0 || p.x == w - 1) && (p.y == 0 || p.y == h - 1)
}

#[test]
fn thirty_degree_sweep_on_163x123() {
    let _ = env_logger::builder().is_test(true).try_init();
    let sweep = AngleSweep::with_size(163, 123, SweepOptions::new(FRAC_PI_6)).unwrap();
    let mut per_orientation: BTreeMap<usize, usize> = BTreeMap::new();
    for c in sweep {
        *per_orientation.entry(c.orientation).or_default() += 1;
    }
    assert_eq!(per_orientation.len(), 12);
    assert_eq!(per_orientation.keys().copied().collect::<Vec<_>>(), (0..12).collect::<Vec<_>>());
    let total: usize = per_orientation.values().sum();
    assert_eq!(total, 2 * 123 + 2 * 163 + 8 * (163 + 123 - 1));
}

#[test]
fn orientation_count_is_ceil_of_full_turn() {
    for step in [0.05, 0.1, 0.3, 1.0, FRAC_PI_6, TAU / 180.0] {
        let expected = (TAU / step).ceil() as usize;
        let visited: HashSet<usize> = AngleSweep::with_size(9, 7, SweepOptions::new(step))
            .unwrap()
            .map(|c| c.orientation)
            .collect();
        assert_eq!(visited.len(), orientation_count(step));
        assert!(
            visited.len().abs_diff(expected) <= 1,
            "step={step}: visited {} vs ceil {expected}",
            visited.len()
        );
    }
}

#[test]
fn axis_sweep_covers_every_border_point() {
    let dim = Dimension::new(6, 4).unwrap();
    let starts: HashSet<(i32, i32)> = AngleSweep::new(dim, SweepOptions::new(FRAC_PI_2))
        .unwrap()
        .map(|c| (c.a.x, c.a.y))
        .collect();
    let border: HashSet<(i32, i32)> = border_points(6, 4).into_iter().collect();
    assert_eq!(starts, border);
}

#[test]
fn start_points_face_into_the_grid() {
    let dim = Dimension::new(20, 13).unwrap();
    for c in AngleSweep::new(dim, SweepOptions::with_orientations(40)).unwrap() {
        if is_corner(dim, c.a) {
            continue;
        }
        let (nx, ny) = inward_normal(c.side_a);
        let dot = nx * c.direction.x + ny * c.direction.y;
        assert!(dot > -1e-9, "ray from {} on {} points outward at θ={}", c.a, c.side_a, c.theta);
    }
}

#[test]
fn start_points_stay_on_plan_sides() {
    let boundary = Boundary::with_size(11, 8).unwrap();
    let mut sweep = AngleSweep::from_boundary(boundary, SweepOptions::with_orientations(16)).unwrap();
    loop {
        let plan = sweep.heading().plan();
        let side = sweep.position().side;
        let allowed = if sweep.heading().is_axis_aligned() {
            side == plan.start || sweep.position() == plan.fin()
        } else {
            side == plan.start || side == plan.start.next() || sweep.position() == plan.fin()
        };
        assert!(allowed, "{:?} start on {side}", sweep.heading());
        if !sweep.advance() {
            break;
        }
    }
}

#[test]
fn fast_endpoint_lies_beyond_the_grid() {
    let boundary = Boundary::with_size(15, 10).unwrap();
    let sweep = AngleSweep::from_boundary(boundary, SweepOptions::with_orientations(24)).unwrap();
    for c in sweep {
        assert!(!boundary.contains(c.b), "{c}");
    }
}

#[test]
fn exact_candidates_agree_with_fast_direction() {
    let boundary = Boundary::with_size(40, 25).unwrap();
    let mut sweep = AngleSweep::from_boundary(boundary, SweepOptions::with_orientations(12)).unwrap();
    loop {
        let exact = sweep.exact_candidate();
        let fast = sweep.current();
        if exact.a != exact.b {
            let d = exact.b.to_point2() - exact.a.to_point2();
            let cos = d.normalize().dot(&fast.direction);
            // Rounding bends short rays; long ones must follow the direction.
            if d.norm() > 10.0 {
                assert!(cos > 0.99, "{exact} vs θ={}", fast.theta);
            }
        }
        if !sweep.advance() {
            break;
        }
    }
}

#[test]
fn diagonal_headings_scan_two_sides() {
    let dim = Dimension::new(10, 7).unwrap();
    let mut probe = AngleSweep::new(dim, SweepOptions::with_orientations(8)).unwrap();
    let mut by_orientation: BTreeMap<usize, Vec<GridPoint>> = BTreeMap::new();
    let mut headings = BTreeMap::new();
    loop {
        headings.insert(probe.orientation_index(), probe.heading());
        by_orientation
            .entry(probe.orientation_index())
            .or_default()
            .push(probe.current().a);
        if !probe.advance() {
            break;
        }
    }
    assert_eq!(headings[&1], Heading::UpRight);
    let up_right = &by_orientation[&1];
    assert_eq!(up_right.first(), Some(&GridPoint::new(0, 6)));
    assert_eq!(up_right.last(), Some(&GridPoint::new(9, 0)));
    assert_eq!(up_right.len(), 10 + 7 - 1);
}
