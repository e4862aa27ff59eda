//! Test: the attribute on the struct instead of a field should produce an error.
#![allow(dead_code)]

use iterable::Iterable;

#[derive(Iterable)]
#[iterable(storage)]
struct Misplaced {
    data: Vec<i32>,
}

fn main() {}
