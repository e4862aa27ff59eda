//! Test: an unknown attribute argument should produce an error.
#![allow(dead_code)]

use iterable::Iterable;

#[derive(Iterable)]
struct Samples {
    #[iterable(store)]
    data: Vec<i32>,
}

fn main() {}
