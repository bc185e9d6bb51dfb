// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Contiguous interval between two cuts.
//!
//! A `SingleRange` is never empty: the lower cut is strictly below the upper cut. Constructors that could produce crossing bounds return an `Option` or an empty [`Range`](../range/enum.Range.html).

use crate::bound_value::BoundValue;
use crate::bound_value::BoundValue::*;
use crate::complex_range::gaps;
use crate::ops::Hull;
use crate::range::Range;
use std::cmp::{min, max};
use std::fmt::{Display, Formatter, Error};
use std::slice;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleRange<T> {
  lower: BoundValue<T>,
  upper: BoundValue<T>
}

impl<T> SingleRange<T>
{
  pub fn lower(&self) -> &BoundValue<T> {
    &self.lower
  }

  pub fn upper(&self) -> &BoundValue<T> {
    &self.upper
  }

  pub fn universal() -> SingleRange<T> {
    SingleRange {
      lower: NegativeInfinity,
      upper: PositiveInfinity
    }
  }

  /// `(value, ∞)`
  pub fn starting_after(value: T) -> SingleRange<T> {
    SingleRange { lower: UpperBound(value), upper: PositiveInfinity }
  }

  /// `[value, ∞)`
  pub fn starting_at(value: T) -> SingleRange<T> {
    SingleRange { lower: LowerBound(value), upper: PositiveInfinity }
  }

  /// `(-∞, value)`
  pub fn ending_before(value: T) -> SingleRange<T> {
    SingleRange { lower: NegativeInfinity, upper: LowerBound(value) }
  }

  /// `(-∞, value]`
  pub fn ending_at(value: T) -> SingleRange<T> {
    SingleRange { lower: NegativeInfinity, upper: UpperBound(value) }
  }

  pub fn is_universal(&self) -> bool {
    match (&self.lower, &self.upper) {
      (NegativeInfinity, PositiveInfinity) => true,
      _ => false
    }
  }
}

impl<T: Clone> SingleRange<T>
{
  /// `[value, value]`
  pub fn singleton(value: T) -> SingleRange<T> {
    SingleRange { lower: LowerBound(value.clone()), upper: UpperBound(value) }
  }
}

impl<T: Ord> SingleRange<T>
{
  /// Returns `None` if no value lies between `lower` and `upper`.
  pub fn new(lower: BoundValue<T>, upper: BoundValue<T>) -> Option<SingleRange<T>> {
    if lower < upper {
      Some(SingleRange { lower, upper })
    }
    else {
      None
    }
  }

  pub(crate) fn new_unchecked(lower: BoundValue<T>, upper: BoundValue<T>) -> SingleRange<T> {
    debug_assert!(lower < upper, "A single range must have its lower bound strictly below its upper bound.");
    SingleRange { lower, upper }
  }

  pub fn includes(&self, value: &T) -> bool {
    self.lower.precedes(value) && self.upper.succeeds(value)
  }

  /// `true` if both intervals share at least one value.
  pub fn overlaps(&self, other: &SingleRange<T>) -> bool {
    self.lower < other.upper && other.lower < self.upper
  }

  /// `true` if both intervals overlap or are adjacent, meaning their union is contiguous.
  pub fn touches(&self, other: &SingleRange<T>) -> bool {
    self.lower <= other.upper && other.lower <= self.upper
  }
}

impl<T: Ord + Clone> SingleRange<T>
{
  pub fn intersection(&self, other: &SingleRange<T>) -> Option<SingleRange<T>> {
    SingleRange::new(
      max(&self.lower, &other.lower).clone(),
      min(&self.upper, &other.upper).clone())
  }

  pub fn greater_than(&self, value: T) -> Range<T> {
    self.narrow_lower(UpperBound(value))
  }

  pub fn greater_than_or_equals(&self, value: T) -> Range<T> {
    self.narrow_lower(LowerBound(value))
  }

  pub fn less_than(&self, value: T) -> Range<T> {
    self.narrow_upper(LowerBound(value))
  }

  pub fn less_than_or_equals(&self, value: T) -> Range<T> {
    self.narrow_upper(UpperBound(value))
  }

  fn narrow_lower(&self, lower: BoundValue<T>) -> Range<T> {
    SingleRange::new(max(lower, self.lower.clone()), self.upper.clone()).into()
  }

  fn narrow_upper(&self, upper: BoundValue<T>) -> Range<T> {
    SingleRange::new(self.lower.clone(), min(upper, self.upper.clone())).into()
  }

  pub fn complement(&self) -> Range<T> {
    Range::from_sorted_disjoint(gaps(slice::from_ref(self)))
  }

  pub fn union(&self, other: &Range<T>) -> Range<T> {
    Range::from(self.clone()).union(other)
  }

  pub fn intersect(&self, other: &Range<T>) -> Range<T> {
    Range::from(self.clone()).intersect(other)
  }
}

impl<T: Ord + Clone> Hull for SingleRange<T>
{
  type Output = SingleRange<T>;

  fn hull(&self, other: &SingleRange<T>) -> SingleRange<T> {
    SingleRange::new_unchecked(
      min(&self.lower, &other.lower).clone(),
      max(&self.upper, &other.upper).clone())
  }
}

impl<T: Display> Display for SingleRange<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    let open = match self.lower {
      LowerBound(_) => '[',
      _ => '('
    };
    let close = match self.upper {
      UpperBound(_) => ']',
      _ => ')'
    };
    write!(formatter, "{}{},{}{}", open, self.lower, self.upper, close)
  }
}
