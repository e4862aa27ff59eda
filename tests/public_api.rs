//! Integration tests for the public API.
//!
//! These tests go through the facade only, the way a downstream crate would.

use std::collections::VecDeque;

use iterable::{
    Contiguous, Cursor, CursorError, Difference, Element, Indexed, Iter, Iterable, RandomAccess,
    Tag, algo,
};
use pretty_assertions::assert_eq;

#[derive(Iterable)]
struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

/// Column-major view: position `k` is row `k % rows` of column `k / rows`.
impl Indexed for Matrix {
    type Element = f64;
    type Category = RandomAccess;

    fn len(&self) -> usize {
        self.rows * self.cols
    }

    fn at(&self, index: usize) -> &f64 {
        let (col, row) = (index / self.rows, index % self.rows);
        &self.cells[row * self.cols + col]
    }
}

fn matrix() -> Matrix {
    Matrix {
        rows: 2,
        cols: 3,
        cells: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    }
}

#[test]
fn test_column_major_iteration() {
    let m = matrix();
    let mut seen = Vec::new();
    for x in &m {
        seen.push(*x);
    }
    assert_eq!(seen, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    assert_eq!(m.elements().rev().next(), Some(&6.0));
    assert_eq!(m.end() - m.begin(), 6);
}

#[test]
fn test_cursor_arithmetic_through_facade() {
    let m = matrix();
    let begin: Cursor<&Matrix, RandomAccess> = m.begin();
    let d: Difference = m.end() - begin;
    assert_eq!(d, 6);
    assert_eq!(*(begin + 3), 5.0);
    assert_eq!(begin[5], 6.0);
    assert_eq!(Cursor::<&Matrix, RandomAccess>::TAG, Tag::Default);
}

#[test]
fn test_checked_errors() {
    let m = matrix();
    assert_eq!(
        m.end().try_get(),
        Err(CursorError::OutOfBounds { position: 6, len: 6 })
    );
    assert_eq!(
        (m.begin() - 1).try_get().unwrap_err().to_string(),
        "cursor position -1 is out of bounds for length 6"
    );
    let err = Iter::with_bounds(&m, 4, 7).unwrap_err();
    assert_eq!(err, CursorError::InvalidRange { start: 4, end: 7, len: 6 });
}

#[test]
#[should_panic(expected = "cursor position 6 is out of bounds for length 6")]
fn test_dereferencing_end_panics() {
    let m = matrix();
    let _ = *m.end();
}

#[test]
fn test_contiguous_slices() {
    let mut v: Vec<u8> = b"cursor".to_vec();
    let begin: Cursor<&Vec<u8>, Contiguous> = v.begin();
    let slice = (begin + 1).into_slice_to(v.end() - 1).unwrap();
    assert_eq!(slice, b"urso");

    let end = v.end().position();
    let tail = (v.begin_mut() + 3).into_mut_slice_to(end).unwrap();
    tail.copy_from_slice(b"SOR");
    assert_eq!(v, b"curSOR");
}

#[test]
fn test_search_on_random_access_host() {
    let mut d: VecDeque<i32> = (0..20).rev().collect();
    d.sort_elements();
    let found = algo::binary_search_by(d.begin(), d.end(), |x| x.cmp(&13));
    assert_eq!(found.map(|c| c.position()), Ok(13));
    assert_eq!(algo::lower_bound(d.begin(), d.end(), &100), d.end());

    let mut first = d.begin_mut();
    first.swap(0, 19);
    assert_eq!(d.front(), Some(&19));
}

#[test]
fn test_element_alias() {
    fn first_of<H: Indexed + ?Sized>(host: &H) -> Option<&Element<H>> {
        host.elements().next()
    }
    assert_eq!(first_of(&matrix()), Some(&1.0));
    assert_eq!(first_of(&[9u8; 3][..]), Some(&9));
}

#[test]
fn test_vec_iter_is_still_slice_iter() {
    let mut v = vec![2, 3, 1];
    let it: std::slice::Iter<'_, i32> = v.iter();
    assert_eq!(it.as_slice(), [2, 3, 1]);
    assert!(std::any::type_name_of_val(&v.iter()).contains("slice"));

    v.sort_unstable();
    v.reverse();
    assert_eq!(v, [3, 2, 1]);
    assert!(v.elements().eq(v.iter()));
}
