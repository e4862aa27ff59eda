//! Test: marking two fields as storage should produce an error.
#![allow(dead_code)]

use iterable::Iterable;

#[derive(Iterable)]
struct Twice {
    #[iterable(storage)] first: Vec<i32>,
    #[iterable(storage)] second: Vec<i32>,
}

fn main() {}
