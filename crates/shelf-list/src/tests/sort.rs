// Copyright (c) 2026 The Shelf Developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::ArrayList;

#[test]
fn test_sort_by_ascending() {
    let mut list: ArrayList<i32> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
    list.sort_by(|a, b| a.cmp(b));
    assert_eq!(list.to_vec(), vec![1, 1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn test_sort_by_descending() {
    let mut list: ArrayList<i32> = [3, 1, 4, 1, 5].into_iter().collect();
    list.sort_by(|a, b| b.cmp(a));
    assert_eq!(list.to_vec(), vec![5, 4, 3, 1, 1]);
}

#[test]
fn test_sort_empty_and_single() {
    let mut empty: ArrayList<i32> = ArrayList::new();
    empty.sort_by(|a, b| a.cmp(b));
    assert!(empty.is_empty());

    let mut single: ArrayList<i32> = [7].into_iter().collect();
    single.sort_by(|a, b| a.cmp(b));
    assert_eq!(single.to_vec(), vec![7]);
}

#[test]
fn test_sort_already_sorted() {
    let mut list: ArrayList<i32> = (0..32).collect();
    list.sort_by(|a, b| a.cmp(b));
    assert_eq!(list.to_vec(), (0..32).collect::<Vec<_>>());
}

#[test]
fn test_sort_reverse_sorted() {
    let mut list: ArrayList<i32> = (0..32).rev().collect();
    list.sort_by(|a, b| a.cmp(b));
    assert_eq!(list.to_vec(), (0..32).collect::<Vec<_>>());
}

#[test]
fn test_sort_all_duplicates() {
    let mut list: ArrayList<i32> = std::iter::repeat(5).take(16).collect();
    list.sort_by(|a, b| a.cmp(b));
    assert_eq!(list.to_vec(), vec![5; 16]);
}

#[test]
fn test_sort_after_growth() {
    let mut list = ArrayList::with_capacity(2);
    for value in [9, 2, 7, 4, 8, 1, 3] {
        list.push(value);
    }

    list.sort_by(|a, b| a.cmp(b));
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 7, 8, 9]);
}

#[test]
fn test_sorted_by_leaves_original_untouched() {
    let original: ArrayList<i32> = [3, 1, 2].into_iter().collect();

    let sorted = original.sorted_by(|a, b| a.cmp(b));

    assert_eq!(original.to_vec(), vec![3, 1, 2]);
    assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_sort_by_custom_key() {
    let mut list: ArrayList<&str> = ["pear", "fig", "banana"].into_iter().collect();
    list.sort_by(|a, b| a.len().cmp(&b.len()));
    assert_eq!(list.to_vec(), vec!["fig", "pear", "banana"]);
}
