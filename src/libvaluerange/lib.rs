// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library represents arbitrary subsets of a totally ordered type as unions of disjoint intervals, and provides the boolean algebra over them: union, intersection, complement, difference, membership and overlap tests. Bounds can be open, closed or infinite, on any type implementing `Ord`.
//!
//! Bounds are [cut points](bound_value/index.html) between values rather than values, which gives one total order for every kind of endpoint. An interval is a [pair of cuts](single_range/index.html), several disjoint intervals form a [complex range](complex_range/index.html), and [`Range`](range/enum.Range.html) wraps all shapes, including the empty and universal ranges, behind one API.
//!
//! # Examples
//!
//! ```rust
//! use valuerange::{Range, BoundValue};
//!
//! let a = Range::universal().greater_than(2);
//! assert!(!a.includes(&2) && a.includes(&3));
//!
//! let b = Range::greater_than_or_equals_value(2) & Range::less_than_or_equals_value(5);
//! assert_eq!(format!("{}", b), "[2,5]");
//!
//! let c = &b - &Range::between(BoundValue::UpperBound(3), BoundValue::LowerBound(4));
//! assert_eq!(format!("{}", c), "[2,3],[4,5]");
//! assert_eq!(!!c.clone(), c);
//! ```
//!
//! Set operations are also available through the generic traits of [gcollections](https://docs.rs/gcollections).
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)

#[macro_use]
mod macros;
pub mod bound_value;
pub mod single_range;
pub mod complex_range;
pub mod range;
pub mod ops;

pub use crate::bound_value::BoundValue;
pub use crate::single_range::SingleRange;
pub use crate::complex_range::ComplexRange;
pub use crate::range::Range;
