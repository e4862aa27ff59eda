//! Test: an attribute without arguments should produce an error.
#![allow(dead_code)]

use iterable::Iterable;

#[derive(Iterable)]
struct Samples {
    #[iterable()]
    data: Vec<i32>,
}

fn main() {}
