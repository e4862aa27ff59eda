use std::collections::VecDeque;

use iterable::{Delegate, Indexed, IndexedMut, Iterable, RandomAccess, Swap, algo};

/// Fixed-capacity host: only the first `len` slots are elements.
#[derive(Iterable)]
pub struct Stack {
    slots: [i64; 16],
    len: usize,
}

impl Stack {
    pub fn from_slice(items: &[i64]) -> Self {
        let mut slots = [0; 16];
        slots[..items.len()].copy_from_slice(items);
        Stack {
            slots,
            len: items.len(),
        }
    }
}

impl Indexed for Stack {
    type Element = i64;
    type Category = RandomAccess;

    fn len(&self) -> usize {
        self.len
    }

    fn at(&self, index: usize) -> &i64 {
        &self.slots[..self.len][index]
    }
}

impl IndexedMut for Stack {
    fn at_mut(&mut self, index: usize) -> &mut i64 {
        &mut self.slots[..self.len][index]
    }
}

impl Swap for Stack {
    fn swap(&mut self, a: usize, b: usize) {
        self.slots[..self.len].swap(a, b);
    }
}

/// Host that forwards to a plain buffer.
#[derive(Iterable)]
pub struct Samples {
    #[iterable(storage)]
    data: Vec<i64>,
}

/// What one host reports for a case input.
#[derive(Debug)]
pub struct Observed {
    pub kind: &'static str,
    pub elements: Vec<i64>,
    pub sum: i64,
    pub distance: isize,
    pub first: Option<i64>,
    pub last: Option<i64>,
    pub reversed: Vec<i64>,
    pub sorted: Vec<i64>,
}

/// Runs the same observations over every kind of host built from `input`.
pub fn observe_all(input: &[i64]) -> Vec<Observed> {
    let mut vec = input.to_vec();
    let mut deque: VecDeque<i64> = input.iter().copied().collect();
    let mut stack = Stack::from_slice(input);
    let mut samples = Samples {
        data: input.to_vec(),
    };
    vec![
        observe("Vec", &mut vec),
        observe("VecDeque", &mut deque),
        observe("Stack", &mut stack),
        observe_delegate(&mut samples),
    ]
}

fn observe<H>(kind: &'static str, host: &mut H) -> Observed
where
    H: Swap<Element = i64> + ?Sized,
{
    let (begin, end) = (host.begin(), host.end());
    let mut elements = Vec::new();
    let mut cursor = begin;
    while cursor != end {
        elements.push(*cursor);
        cursor.inc();
    }
    let distance = end - begin;
    let first = begin.get().copied();
    let last = (end - 1).get().copied();
    let sum = host.elements().sum();
    let reversed = host.elements().rev().copied().collect();

    let len = host.len();
    algo::sort_unstable(host.begin_mut(), len);
    let sorted = host.elements().copied().collect();

    Observed {
        kind,
        elements,
        sum,
        distance,
        first,
        last,
        reversed,
        sorted,
    }
}

fn observe_delegate(host: &mut Samples) -> Observed {
    let (begin, end) = (host.begin(), host.end());
    let elements = begin.iter_to(end).copied().collect();
    let distance = end - begin;
    let first = begin.get().copied();
    let last = (end - 1).get().copied();
    let sum = host.iter().sum();
    let reversed = (&*host).into_iter().rev().copied().collect();

    let len = host.storage().len();
    algo::sort_unstable(host.begin_mut(), len);
    let sorted = host.iter().copied().collect();

    Observed {
        kind: "Samples",
        elements,
        sum,
        distance,
        first,
        last,
        reversed,
        sorted,
    }
}

// Helper macro to compare one observation against the expected form
#[macro_export]
macro_rules! assert_case {
    ($kind:expr, $result:expr, { None }) => {
        match $result {
            None => {},
            other => panic!("{}: expected None but got {:#?}", $kind, other),
        }
    };

    ($kind:expr, $result:expr, { $expected:expr }) => {
        pretty_assertions::assert_eq!($result, $expected, "host: {}", $kind);
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] elements, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_elements() {
            for observed in $crate::cases::observe_all(&input()) {
                assert_case!(observed.kind, observed.elements, $expected);
            }
        }
    };

    ([$($attrs:meta)*] sum, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_sum() {
            for observed in $crate::cases::observe_all(&input()) {
                assert_case!(observed.kind, observed.sum, $expected);
            }
        }
    };

    ([$($attrs:meta)*] distance, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_distance() {
            for observed in $crate::cases::observe_all(&input()) {
                assert_case!(observed.kind, observed.distance, $expected);
            }
        }
    };

    ([$($attrs:meta)*] first, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_first() {
            for observed in $crate::cases::observe_all(&input()) {
                assert_case!(observed.kind, observed.first, $expected);
            }
        }
    };

    ([$($attrs:meta)*] last, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_last() {
            for observed in $crate::cases::observe_all(&input()) {
                assert_case!(observed.kind, observed.last, $expected);
            }
        }
    };

    ([$($attrs:meta)*] reversed, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_reversed() {
            for observed in $crate::cases::observe_all(&input()) {
                assert_case!(observed.kind, observed.reversed, $expected);
            }
        }
    };

    ([$($attrs:meta)*] sorted, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_sorted() {
            for observed in $crate::cases::observe_all(&input()) {
                assert_case!(observed.kind, observed.sorted, $expected);
            }
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input second, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            fn input() -> Vec<i64> {
                let items: &[i64] = &$input;
                items.to_vec()
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
