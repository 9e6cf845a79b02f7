// Copyright (c) 2026 The Shelf Developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place comparator quicksort shared by `sort_by` and `sorted_by`.

use core::cmp::Ordering;
use core::mem;

/// Sorts `items` in place according to `compare`. Not stable.
///
/// Recurses only into the smaller partition and loops on the larger one,
/// bounding the stack at O(log n) frames.
pub(crate) fn quicksort<T, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut rest = items;
    while rest.len() > 1 {
        let pivot = partition(rest, compare);

        let slice = mem::take(&mut rest);
        let (left, right) = slice.split_at_mut(pivot);
        // pivot is in its final slot
        let right = &mut right[1..];

        if left.len() <= right.len() {
            quicksort(left, compare);
            rest = right;
        } else {
            quicksort(right, compare);
            rest = left;
        }
    }
}

/// Median-of-three Lomuto partition. Returns the pivot's final index.
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = items.len() - 1;
    let mid = items.len() / 2;

    // Order first/middle/last so the median lands at mid, then park it at
    // the end as the pivot.
    if compare(&items[mid], &items[0]) == Ordering::Less {
        items.swap(mid, 0);
    }
    if compare(&items[last], &items[0]) == Ordering::Less {
        items.swap(last, 0);
    }
    if compare(&items[last], &items[mid]) == Ordering::Less {
        items.swap(last, mid);
    }
    items.swap(mid, last);

    let mut store = 0;
    for i in 0..last {
        if compare(&items[i], &items[last]) == Ordering::Less {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}
