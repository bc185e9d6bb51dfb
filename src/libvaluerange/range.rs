// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary subset of an ordered domain.
//!
//! A range is one of four shapes: empty, universal, a single interval or a union of several disjoint intervals. Every operation returns its result in the minimal shape, so that two ranges holding the same values compare equal with `==`.
//!
//! # Examples
//!
//! ```rust
//! use valuerange::Range;
//!
//! let outside = Range::less_than_value(1) | Range::greater_than_value(3);
//! assert_eq!(format!("{}", outside), "(-∞,1),(3,∞)");
//! assert!(!outside.includes(&2));
//! assert!(outside.includes(&0) && outside.includes(&4));
//!
//! let inside = !outside;
//! assert_eq!(format!("{}", inside), "[1,3]");
//! assert_eq!(inside, Range::greater_than_or_equals_value(1) & Range::less_than_or_equals_value(3));
//! ```

use crate::bound_value::BoundValue;
use crate::complex_range::*;
use crate::ops::{Hull, Whole};
use crate::single_range::SingleRange;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::Error as DeError;
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use std::borrow::Cow;
use std::fmt::{Display, Formatter, Error};
use std::iter::FromIterator;
use std::ops::{BitOr, Add, BitAnd, Mul, Sub, BitXor, Not};
use std::slice;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Range<T> {
  Empty,
  Universal,
  Single(SingleRange<T>),
  Complex(ComplexRange<T>)
}

impl<T> Range<T>
{
  pub fn universal() -> Range<T> {
    Range::Universal
  }

  pub fn is_empty(&self) -> bool {
    match self {
      Range::Empty => true,
      _ => false
    }
  }

  pub fn is_universal(&self) -> bool {
    match self {
      Range::Universal => true,
      Range::Single(single) => single.is_universal(),
      _ => false
    }
  }

  pub fn greater_than_value(value: T) -> Range<T> {
    Range::Single(SingleRange::starting_after(value))
  }

  pub fn greater_than_or_equals_value(value: T) -> Range<T> {
    Range::Single(SingleRange::starting_at(value))
  }

  pub fn less_than_value(value: T) -> Range<T> {
    Range::Single(SingleRange::ending_before(value))
  }

  pub fn less_than_or_equals_value(value: T) -> Range<T> {
    Range::Single(SingleRange::ending_at(value))
  }
}

impl<T: Clone> Range<T>
{
  pub fn singleton(value: T) -> Range<T> {
    Range::Single(SingleRange::singleton(value))
  }

  /// The canonical decomposition of the range: sorted, separated intervals. The universal range decomposes into the single interval `(-∞,∞)`.
  pub fn intervals(&self) -> Cow<[SingleRange<T>]> {
    match self {
      Range::Empty => Cow::Borrowed(&[]),
      Range::Universal => Cow::Owned(vec![SingleRange::universal()]),
      Range::Single(single) => Cow::Borrowed(slice::from_ref(single)),
      Range::Complex(complex) => Cow::Borrowed(complex.pieces())
    }
  }
}

impl<T: Ord + Clone> Range<T>
{
  // precondition: `pieces` is sorted, and each piece ends strictly before the next one starts.
  pub(crate) fn from_sorted_disjoint(mut pieces: Vec<SingleRange<T>>) -> Range<T> {
    match pieces.len() {
      0 => Range::Empty,
      1 => pieces.pop().into(),
      _ => Range::Complex(ComplexRange::from_canonical(pieces))
    }
  }

  /// Every value between two cuts, empty if the cuts cross.
  pub fn between(lower: BoundValue<T>, upper: BoundValue<T>) -> Range<T> {
    SingleRange::new(lower, upper).into()
  }

  pub fn includes(&self, value: &T) -> bool {
    match self {
      Range::Empty => false,
      Range::Universal => true,
      Range::Single(single) => single.includes(value),
      Range::Complex(complex) => complex.includes(value)
    }
  }

  pub fn overlaps_with(&self, other: &Range<T>) -> bool {
    match (self, other) {
      (Range::Empty, _) | (_, Range::Empty) => false,
      (Range::Universal, _) | (_, Range::Universal) => true,
      (Range::Single(a), Range::Single(b)) => a.overlaps(b),
      (Range::Complex(a), b) | (b, Range::Complex(a)) => a.overlaps_with(&b.intervals())
    }
  }

  pub fn union(&self, other: &Range<T>) -> Range<T> {
    match (self, other) {
      (Range::Empty, x) | (x, Range::Empty) => x.canonical(),
      (Range::Universal, _) | (_, Range::Universal) => Range::Universal,
      (a, b) => Range::from_sorted_disjoint(union_sweep(&a.intervals(), &b.intervals()))
    }
  }

  pub fn intersect(&self, other: &Range<T>) -> Range<T> {
    match (self, other) {
      (Range::Empty, _) | (_, Range::Empty) => Range::Empty,
      (Range::Universal, x) | (x, Range::Universal) => x.canonical(),
      (a, b) => Range::from_sorted_disjoint(intersection_sweep(&a.intervals(), &b.intervals()))
    }
  }

  pub fn complement(&self) -> Range<T> {
    match self {
      Range::Empty => Range::Universal,
      Range::Universal => Range::Empty,
      Range::Single(single) => single.complement(),
      Range::Complex(complex) => Range::from_sorted_disjoint(complex.complement())
    }
  }

  pub fn subtract(&self, other: &Range<T>) -> Range<T> {
    self.intersect(&other.complement())
  }

  pub fn symmetric_difference(&self, other: &Range<T>) -> Range<T> {
    self.subtract(other).union(&other.subtract(self))
  }

  pub fn is_subset(&self, other: &Range<T>) -> bool {
    self.subtract(other).is_empty()
  }

  pub fn greater_than(&self, value: T) -> Range<T> {
    self.bounded_by(SingleRange::starting_after(value))
  }

  pub fn greater_than_or_equals(&self, value: T) -> Range<T> {
    self.bounded_by(SingleRange::starting_at(value))
  }

  pub fn less_than(&self, value: T) -> Range<T> {
    self.bounded_by(SingleRange::ending_before(value))
  }

  pub fn less_than_or_equals(&self, value: T) -> Range<T> {
    self.bounded_by(SingleRange::ending_at(value))
  }

  fn bounded_by(&self, half_line: SingleRange<T>) -> Range<T> {
    match self {
      Range::Universal => Range::Single(half_line),
      _ => self.intersect(&Range::Single(half_line))
    }
  }

  // A universal `Single` built by hand is read as `Universal`.
  fn canonical(&self) -> Range<T> {
    match self {
      Range::Single(single) if single.is_universal() => Range::Universal,
      _ => self.clone()
    }
  }
}

impl<T> From<SingleRange<T>> for Range<T>
{
  fn from(single: SingleRange<T>) -> Range<T> {
    if single.is_universal() {
      Range::Universal
    }
    else {
      Range::Single(single)
    }
  }
}

impl<T> From<Option<SingleRange<T>>> for Range<T>
{
  fn from(single: Option<SingleRange<T>>) -> Range<T> {
    single.map_or(Range::Empty, Range::from)
  }
}

/// Builds the canonical range of any collection of intervals, overlapping or not, in any order.
impl<T: Ord + Clone> FromIterator<SingleRange<T>> for Range<T>
{
  fn from_iter<I>(iterable: I) -> Range<T> where
   I: IntoIterator<Item=SingleRange<T>>
  {
    let mut intervals: Vec<SingleRange<T>> = iterable.into_iter().collect();
    intervals.sort_by(|a, b| a.lower().cmp(b.lower()));
    let mut pieces = Vec::with_capacity(intervals.len());
    for interval in intervals {
      join_or_push(&mut pieces, interval);
    }
    Range::from_sorted_disjoint(pieces)
  }
}

// `x` must not start before the last interval of `pieces`.
fn join_or_push<T: Ord + Clone>(pieces: &mut Vec<SingleRange<T>>, x: SingleRange<T>) {
  let joint = match pieces.pop() {
    Some(back) if back.touches(&x) => back.hull(&x),
    Some(back) => {
      pieces.push(back);
      x
    }
    None => x
  };
  pieces.push(joint);
}

impl<T: Ord + Clone> Hull for Range<T>
{
  type Output = Range<T>;

  fn hull(&self, other: &Range<T>) -> Range<T> {
    let intervals = self.union(other).intervals().into_owned();
    match (intervals.first(), intervals.last()) {
      (Some(front), Some(back)) => Range::between(front.lower().clone(), back.upper().clone()),
      _ => Range::Empty
    }
  }
}

impl<T> Whole for Range<T>
{
  fn whole() -> Range<T> {
    Range::Universal
  }
}

impl<T> Collection for Range<T>
{
  type Item = T;
}

impl<T> Empty for Range<T>
{
  fn empty() -> Range<T> {
    Range::Empty
  }
}

impl<T> IsEmpty for Range<T>
{
  fn is_empty(&self) -> bool {
    Range::is_empty(self)
  }
}

impl<T: Clone> Singleton for Range<T>
{
  fn singleton(value: T) -> Range<T> {
    Range::singleton(value)
  }
}

impl<T: Ord + Clone> Contains for Range<T>
{
  fn contains(&self, value: &T) -> bool {
    self.includes(value)
  }
}

impl<T: Ord + Clone> Overlap for Range<T>
{
  fn overlap(&self, other: &Range<T>) -> bool {
    self.overlaps_with(other)
  }
}

impl<T: Ord + Clone> Disjoint for Range<T>
{
  fn is_disjoint(&self, other: &Range<T>) -> bool {
    !self.overlaps_with(other)
  }
}

impl<T: Ord + Clone> Subset for Range<T>
{
  fn is_subset(&self, other: &Range<T>) -> bool {
    Range::is_subset(self, other)
  }
}

impl<T: Ord + Clone> ProperSubset for Range<T>
{
  fn is_proper_subset(&self, other: &Range<T>) -> bool {
    Range::is_subset(self, other) && !Range::is_subset(other, self)
  }
}

impl<T: Ord + Clone> Complement for Range<T>
{
  fn complement(&self) -> Range<T> {
    Range::complement(self)
  }
}

range_set_op! {
  Union, union, union;
  Intersection, intersection, intersect;
  Difference, difference, subtract;
  SymmetricDifference, symmetric_difference, symmetric_difference
}

range_binop! {
  BitOr, bitor, union;
  Add, add, union;
  BitAnd, bitand, intersect;
  Mul, mul, intersect;
  Sub, sub, subtract;
  BitXor, bitxor, symmetric_difference
}

impl<T: Ord + Clone> Not for Range<T>
{
  type Output = Range<T>;

  fn not(self) -> Range<T> {
    self.complement()
  }
}

impl<'a, T: Ord + Clone> Not for &'a Range<T>
{
  type Output = Range<T>;

  fn not(self) -> Range<T> {
    self.complement()
  }
}

impl<T: Display> Display for Range<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    match self {
      Range::Empty => formatter.write_str("∅"),
      Range::Universal => formatter.write_str("(-∞,∞)"),
      Range::Single(single) => single.fmt(formatter),
      Range::Complex(complex) => complex.fmt(formatter)
    }
  }
}

impl<T> Serialize for Range<T> where
  T: Serialize + Clone
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    serializer.collect_seq(self.intervals().iter().map(|piece| (piece.lower(), piece.upper())))
  }
}

impl<'de, T> Deserialize<'de> for Range<T> where
  T: Deserialize<'de> + Ord + Clone
{
  fn deserialize<D>(deserializer: D) -> Result<Range<T>, D::Error> where
    D: Deserializer<'de>
  {
    let pairs: Vec<(BoundValue<T>, BoundValue<T>)> = Vec::deserialize(deserializer)?;
    let mut pieces = Vec::with_capacity(pairs.len());
    for (lower, upper) in pairs {
      match SingleRange::new(lower, upper) {
        Some(piece) => pieces.push(piece),
        None => return Err(D::Error::custom("range interval with a lower bound not below its upper bound"))
      }
    }
    Ok(pieces.into_iter().collect())
  }
}
