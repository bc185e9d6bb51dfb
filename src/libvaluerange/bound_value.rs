// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Cut points between the values of an ordered domain.
//!
//! A bound value is not a value of the domain but a position *between* values. `LowerBound(v)` sits just below `v` and `UpperBound(v)` just above it, so a single total order covers open, closed and unbounded endpoints:
//!
//! ```text
//!   -∞  ...  LowerBound(1)  1  UpperBound(1)  ...  LowerBound(2)  2  UpperBound(2)  ...  ∞
//! ```
//!
//! An interval is then a pair of cuts: `[1,2]` is `(LowerBound(1), UpperBound(2))` while `(1,2)` is `(UpperBound(1), LowerBound(2))`.
//!
//! # Examples
//!
//! ```rust
//! use valuerange::BoundValue::*;
//!
//! assert!(UpperBound(1) < LowerBound(2));
//! assert!(LowerBound(2) < UpperBound(2));
//! assert!(PositiveInfinity > LowerBound(2));
//! assert!(NegativeInfinity::<i32> < PositiveInfinity);
//! ```

use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::fmt::{Display, Formatter, Error};
use serde::{Serialize, Deserialize};

use self::BoundValue::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundValue<T> {
  NegativeInfinity,
  /// Cut just above the value: closed upper edge of `[.., v]`, open lower edge of `(v, ..]`.
  UpperBound(T),
  /// Cut just below the value: closed lower edge of `[v, ..]`, open upper edge of `[.., v)`.
  LowerBound(T),
  PositiveInfinity
}

impl<T> BoundValue<T>
{
  /// The domain value the cut is derived from, `None` for the infinities.
  pub fn value(&self) -> Option<&T> {
    match self {
      UpperBound(v) | LowerBound(v) => Some(v),
      NegativeInfinity | PositiveInfinity => None
    }
  }

  pub fn is_infinite(&self) -> bool {
    self.value().is_none()
  }
}

impl<T: Ord> BoundValue<T>
{
  /// `true` if the cut lies below `value`, i.e. `self <= LowerBound(value)`.
  pub fn precedes(&self, value: &T) -> bool {
    match self {
      NegativeInfinity => true,
      UpperBound(v) => v < value,
      LowerBound(v) => v <= value,
      PositiveInfinity => false
    }
  }

  /// `true` if the cut lies above `value`, i.e. `UpperBound(value) <= self`.
  pub fn succeeds(&self, value: &T) -> bool {
    match self {
      NegativeInfinity => false,
      UpperBound(v) => value <= v,
      LowerBound(v) => value < v,
      PositiveInfinity => true
    }
  }
}

impl<T: Ord> PartialOrd for BoundValue<T>
{
  fn partial_cmp(&self, other: &BoundValue<T>) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: Ord> Ord for BoundValue<T>
{
  fn cmp(&self, other: &BoundValue<T>) -> Ordering {
    match (self, other) {
      (NegativeInfinity, NegativeInfinity)
    | (PositiveInfinity, PositiveInfinity) => Equal,
      (NegativeInfinity, _) | (_, PositiveInfinity) => Less,
      (PositiveInfinity, _) | (_, NegativeInfinity) => Greater,
      (UpperBound(a), UpperBound(b))
    | (LowerBound(a), LowerBound(b)) => a.cmp(b),
      (UpperBound(a), LowerBound(b)) => if a < b { Less } else { Greater },
      (LowerBound(a), UpperBound(b)) => if a <= b { Less } else { Greater }
    }
  }
}

impl<T: Display> Display for BoundValue<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    match self {
      NegativeInfinity => formatter.write_str("-∞"),
      PositiveInfinity => formatter.write_str("∞"),
      UpperBound(v) | LowerBound(v) => v.fmt(formatter)
    }
  }
}
