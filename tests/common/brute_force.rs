//! Reference enumeration written directly from the coordinate rules, without
//! going through the boundary walk.

use std::collections::HashSet;

pub type Pt = (i32, i32);

/// Side index of a border point, each side owning the corner it starts at:
/// 0 = right (x = W-1, y < H-1), 1 = top (y = H-1, x > 0),
/// 2 = left (x = 0, y > 0), 3 = bottom (y = 0, x < W-1).
pub fn side_of(w: i32, h: i32, (x, y): Pt) -> Option<usize> {
    if x == w - 1 && y < h - 1 {
        Some(0)
    } else if y == h - 1 && x > 0 {
        Some(1)
    } else if x == 0 && y > 0 {
        Some(2)
    } else if y == 0 && x < w - 1 {
        Some(3)
    } else {
        None
    }
}

pub fn border_points(w: i32, h: i32) -> Vec<Pt> {
    let mut pts = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                pts.push((x, y));
            }
        }
    }
    pts
}

/// Pairs along one grid line are kept only when they span the full grid.
pub fn collinear_and_partial(w: i32, h: i32, a: Pt, b: Pt) -> bool {
    if a.0 == b.0 {
        return !(a.1.min(b.1) == 0 && a.1.max(b.1) == h - 1);
    }
    if a.1 == b.1 {
        return !(a.0.min(b.0) == 0 && a.0.max(b.0) == w - 1);
    }
    false
}

/// Every unordered pair on different sides that is not a partial edge run.
pub fn expected_pairs(w: i32, h: i32) -> HashSet<(Pt, Pt)> {
    let pts = border_points(w, h);
    let mut out = HashSet::new();
    for (i, &p) in pts.iter().enumerate() {
        for &q in &pts[i + 1..] {
            if side_of(w, h, p) == side_of(w, h, q) {
                continue;
            }
            if collinear_and_partial(w, h, p, q) {
                continue;
            }
            out.insert(ordered(p, q));
        }
    }
    out
}

pub fn ordered(p: Pt, q: Pt) -> (Pt, Pt) {
    if p <= q {
        (p, q)
    } else {
        (q, p)
    }
}
