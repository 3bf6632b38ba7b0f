//! Free-space bookkeeping: splitting free rectangles around a placement and pruning redundant ones.
//!
//! Free rectangles are maximal and may overlap each other; only containment is pruned.

use crate::model::Rect;

/// Splits every free rectangle that overlaps `used`, in place.
///
/// An overlapped free rectangle is removed (preserving the order of the rest) and its
/// slices are appended to the end of the list.
pub(crate) fn split_all(free: &mut Vec<Rect>, used: &Rect) {
    let mut i = 0;
    while i < free.len() {
        let fr = free[i];
        if fr.intersects(used) {
            free.remove(i);
            split_free_node(&fr, used, free);
        } else {
            i += 1;
        }
    }
}

/// Emits the slices of `fr` left uncovered by `used`, in top, bottom, left, right order.
///
/// Returns false (emitting nothing) when the two do not overlap.
pub(crate) fn split_free_node(fr: &Rect, used: &Rect, out: &mut Vec<Rect>) -> bool {
    if !fr.intersects(used) {
        return false;
    }
    let fr_x2 = fr.right();
    let fr_y2 = fr.bottom();
    let u_x2 = used.right();
    let u_y2 = used.bottom();

    // Top
    if used.y > fr.y && used.y < fr_y2 {
        out.push(Rect::new(fr.x, fr.y, fr.width, used.y - fr.y));
    }
    // Bottom
    if u_y2 < fr_y2 {
        out.push(Rect::new(fr.x, u_y2, fr.width, fr_y2 - u_y2));
    }
    // Left
    if used.x > fr.x && used.x < fr_x2 {
        out.push(Rect::new(fr.x, fr.y, used.x - fr.x, fr.height));
    }
    // Right
    if u_x2 < fr_x2 {
        out.push(Rect::new(u_x2, fr.y, fr_x2 - u_x2, fr.height));
    }
    true
}

/// Removes every free rectangle contained in another one. Pairwise, order-preserving.
pub(crate) fn prune(free: &mut Vec<Rect>) {
    let mut i = 0;
    while i < free.len() {
        let a = free[i];
        let mut remove_i = false;
        let mut j = i + 1;
        while j < free.len() {
            let b = free[j];
            if a.is_contained_in(&b) {
                remove_i = true;
                break;
            }
            if b.is_contained_in(&a) {
                free.remove(j);
                continue;
            }
            j += 1;
        }
        if remove_i {
            free.remove(i);
        } else {
            i += 1;
        }
    }
}
