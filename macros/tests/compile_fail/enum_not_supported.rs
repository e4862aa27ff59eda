//! Test: deriving on an enum should produce an error.
#![allow(dead_code)]

use iterable::Iterable;

#[derive(Iterable)]
enum Shape {
    Circle,
    Square,
}

fn main() {}
