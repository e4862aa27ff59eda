//! Test: naming `storage` twice should produce an error.
#![allow(dead_code)]

use iterable::Iterable;

#[derive(Iterable)]
struct Samples {
    #[iterable(storage, storage)]
    data: Vec<i32>,
}

fn main() {}
