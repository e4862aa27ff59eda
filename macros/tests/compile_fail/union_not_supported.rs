//! Test: deriving on a union should produce an error.
#![allow(dead_code)]

use iterable::Iterable;

#[derive(Iterable)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
