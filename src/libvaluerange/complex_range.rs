// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Union of several disjoint intervals.
//!
//! A complex range stores at least two intervals, sorted and separated by a gap, meaning no two of them could be joined into a single one. For example `[1,2] ∪ [5,6] ∪ (8,∞)` is stored as `{[1,2], [5,6], (8,∞)}` whereas `[1,2] ∪ (2,3]` is the single interval `[1,3]`.
//!
//! The sweeps of this module work on any slice in this canonical form (including slices of one interval) and always produce a canonical vector, so that [`Range`](../range/enum.Range.html) only has to pick the right variant.

use crate::bound_value::BoundValue;
use crate::bound_value::BoundValue::*;
use crate::ops::Hull;
use crate::single_range::SingleRange;
use std::fmt::{Display, Formatter, Error};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComplexRange<T> {
  pieces: Vec<SingleRange<T>>
}

impl<T> ComplexRange<T>
{
  pub fn pieces(&self) -> &[SingleRange<T>] {
    &self.pieces
  }

  pub fn lower(&self) -> &BoundValue<T> {
    self.front().lower()
  }

  pub fn upper(&self) -> &BoundValue<T> {
    self.back().upper()
  }

  fn front(&self) -> &SingleRange<T> {
    &self.pieces[0]
  }

  fn back(&self) -> &SingleRange<T> {
    &self.pieces[self.pieces.len() - 1]
  }
}

impl<T: Ord> ComplexRange<T>
{
  // precondition: `pieces` is sorted, and each piece ends strictly before the next one starts.
  pub(crate) fn from_canonical(pieces: Vec<SingleRange<T>>) -> ComplexRange<T> {
    debug_assert!(pieces.len() >= 2, "A complex range holds at least two intervals.");
    debug_assert!(is_canonical(&pieces),
      "The intervals of a complex range must be ordered and must not be joinable.");
    ComplexRange { pieces }
  }

  pub fn includes(&self, value: &T) -> bool {
    // First piece ending above `value`, the only one that could contain it.
    let idx = self.pieces.partition_point(|piece| !piece.upper().succeeds(value));
    self.pieces.get(idx)
      .map_or(false, |piece| piece.lower().precedes(value))
  }

  pub fn overlaps_with(&self, other: &[SingleRange<T>]) -> bool {
    first_overlapping(&self.pieces, other).is_some()
  }
}

impl<T: Ord + Clone> ComplexRange<T>
{
  pub fn complement(&self) -> Vec<SingleRange<T>> {
    gaps(&self.pieces)
  }
}

impl<T: Display> Display for ComplexRange<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    for (i, piece) in self.pieces.iter().enumerate() {
      if i > 0 {
        formatter.write_str(",")?;
      }
      piece.fmt(formatter)?;
    }
    Ok(())
  }
}

pub(crate) fn is_canonical<T: Ord>(pieces: &[SingleRange<T>]) -> bool {
  pieces.windows(2).all(|w| w[0].upper() < w[1].lower())
}

/// Merges two canonical interval lists in a single pass.
///
/// At most one merged interval, the accumulator, is being grown at a time: it absorbs every front interval touching it and is emitted as soon as neither front touches it anymore. Since both inputs are sorted and separated, an emitted interval is never reached by a later one.
pub(crate) fn union_sweep<T: Ord + Clone>(a: &[SingleRange<T>], b: &[SingleRange<T>]) -> Vec<SingleRange<T>>
{
  let mut res = Vec::with_capacity(a.len() + b.len());
  let mut a = a.iter().peekable();
  let mut b = b.iter().peekable();
  let mut acc: Option<SingleRange<T>> = None;
  loop {
    match acc.take() {
      None => {
        let (i, j) = match (a.peek(), b.peek()) {
          (Some(i), Some(j)) => (*i, *j),
          _ => break
        };
        if i.upper() < j.lower() {
          res.push(i.clone());
          a.next();
        }
        else if j.upper() < i.lower() {
          res.push(j.clone());
          b.next();
        }
        else {
          acc = Some(i.hull(j));
          a.next();
          b.next();
        }
      }
      Some(current) => {
        if let Some(i) = a.next_if(|i| i.touches(&current)) {
          acc = Some(current.hull(i));
        }
        else if let Some(j) = b.next_if(|j| j.touches(&current)) {
          acc = Some(current.hull(j));
        }
        else {
          res.push(current);
        }
      }
    }
  }
  // One side is consumed, what remains of the other lies after everything pushed.
  res.extend(a.cloned());
  res.extend(b.cloned());
  res
}

/// Intersects two canonical interval lists in a single pass.
pub(crate) fn intersection_sweep<T: Ord + Clone>(a: &[SingleRange<T>], b: &[SingleRange<T>]) -> Vec<SingleRange<T>>
{
  let mut res = vec![];
  let mut a = a.iter().peekable();
  let mut b = b.iter().peekable();
  while let Some((i, j)) = first_overlapping_fronts(&mut a, &mut b) {
    if let Some(piece) = i.intersection(j) {
      res.push(piece);
    }
    // advance the one with the lowest upper bound, `b` on ties.
    if i.upper() < j.upper() {
      a.next();
    }
    else {
      b.next();
    }
  }
  res
}

// Returns `None` when one of the iterator is consumed.
// Iterators are not consumed if the fronts are already overlapping.
fn first_overlapping_fronts<'a, I, T>(a: &mut std::iter::Peekable<I>, b: &mut std::iter::Peekable<I>)
  -> Option<(&'a SingleRange<T>, &'a SingleRange<T>)> where
 I: Iterator<Item=&'a SingleRange<T>>,
 T: Ord + 'a
{
  loop {
    let (i, j) = match (a.peek(), b.peek()) {
      (Some(i), Some(j)) => (*i, *j),
      _ => return None
    };
    if i.upper() <= j.lower() {
      a.next();
    }
    else if j.upper() <= i.lower() {
      b.next();
    }
    else {
      return Some((i, j));
    }
  }
}

fn first_overlapping<'a, T: Ord>(a: &'a [SingleRange<T>], b: &'a [SingleRange<T>])
  -> Option<(&'a SingleRange<T>, &'a SingleRange<T>)>
{
  first_overlapping_fronts(&mut a.iter().peekable(), &mut b.iter().peekable())
}

/// Complement of a canonical interval list: the gap before the first interval, the gaps between consecutive intervals and the gap after the last one.
pub(crate) fn gaps<T: Ord + Clone>(pieces: &[SingleRange<T>]) -> Vec<SingleRange<T>>
{
  let mut res = Vec::with_capacity(pieces.len() + 1);
  let mut cursor = NegativeInfinity;
  for piece in pieces {
    res.extend(SingleRange::new(cursor, piece.lower().clone()));
    cursor = piece.upper().clone();
  }
  res.extend(SingleRange::new(cursor, PositiveInfinity));
  res
}

#[cfg(test)]
mod tests {
  use super::*;

  // Closed intervals, except for `i32::MIN` and `i32::MAX` standing for the infinities.
  fn make_pieces(intervals: Vec<(i32, i32)>) -> Vec<SingleRange<i32>> {
    intervals.into_iter()
      .map(|(lb, ub)| {
        let lower = if lb == i32::MIN { NegativeInfinity } else { LowerBound(lb) };
        let upper = if ub == i32::MAX { PositiveInfinity } else { UpperBound(ub) };
        SingleRange::new_unchecked(lower, upper)
      })
      .collect()
  }

  fn test_binary_op_sym<F>(test_id: String, a: Vec<(i32, i32)>, b: Vec<(i32, i32)>, op: F, expected: Vec<(i32, i32)>) where
    F: Fn(&[SingleRange<i32>], &[SingleRange<i32>]) -> Vec<SingleRange<i32>>
  {
    let a = make_pieces(a);
    let b = make_pieces(b);
    let expected = make_pieces(expected);
    let result = op(&a, &b);
    assert!(is_canonical(&result), "{} | {:?} is not canonical.", test_id, result);
    assert_eq!(result, expected, "{} | {:?} is different from the expected value.", test_id, result);
    let result = op(&b, &a);
    assert_eq!(result, expected, "{} (sym) | {:?} is different from the expected value.", test_id, result);
  }

  #[test]
  fn test_union() {
    // Note: the first number is the test id, so it should be easy to identify which test has failed.
    // The two first vectors are the operands and the expected result is last.
    // Closed integer intervals such as [1,2] and [3,4] are separated by (2,3): they are not joined.
    let sym_cases = vec![
      // identity tests
      (1, vec![], vec![], vec![]),
      (2, vec![], vec![(1,2)], vec![(1,2)]),
      (3, vec![], vec![(1,2),(7,9)], vec![(1,2),(7,9)]),
      (4, vec![(1,2),(7,9)], vec![(1,2)], vec![(1,2),(7,9)]),
      (5, vec![(1,2),(7,9)], vec![(1,2),(7,9)], vec![(1,2),(7,9)]),
      // front tests
      (6, vec![(-3,-1)], vec![(1,2),(7,9)], vec![(-3,-1),(1,2),(7,9)]),
      (7, vec![(-3,0)], vec![(1,2),(7,9)], vec![(-3,0),(1,2),(7,9)]),
      (8, vec![(-3,1)], vec![(1,2),(7,9)], vec![(-3,2),(7,9)]),
      // middle tests
      (9, vec![(2,7)], vec![(1,2),(7,9)], vec![(1,9)]),
      (10, vec![(3,7)], vec![(1,2),(7,9)], vec![(1,2),(3,9)]),
      (11, vec![(4,5)], vec![(1,2),(7,9)], vec![(1,2),(4,5),(7,9)]),
      (12, vec![(2,8)], vec![(1,2),(7,9)], vec![(1,9)]),
      (13, vec![(2,6)], vec![(1,2),(7,9)], vec![(1,6),(7,9)]),
      // back tests
      (14, vec![(8,9)], vec![(1,2),(7,9)], vec![(1,2),(7,9)]),
      (15, vec![(8,10)], vec![(1,2),(7,9)], vec![(1,2),(7,10)]),
      (16, vec![(9,10)], vec![(1,2),(7,9)], vec![(1,2),(7,10)]),
      (17, vec![(6,10)], vec![(1,2),(6,10)], vec![(1,2),(6,10)]),
      (18, vec![(11,12)], vec![(1,2),(7,9)], vec![(1,2),(7,9),(11,12)]),
      // mixed tests
      (19, vec![(-3,-1),(4,5),(11,12)], vec![(1,2),(7,9)], vec![(-3,-1),(1,2),(4,5),(7,9),(11,12)]),
      (20, vec![(-3,1),(2,7),(9,11)], vec![(1,2),(7,9)], vec![(-3,11)]),
      (21, vec![(-3,5),(7,11)], vec![(1,2),(7,9)], vec![(-3,5),(7,11)]),
      (22, vec![(-3,5),(7,8),(12,12)], vec![(1,2),(7,9)], vec![(-3,5),(7,9),(12,12)]),
      // englobing tests
      (23, vec![(-1,11)], vec![(1,2),(7,9)], vec![(-1,11)]),
      // unbounded tests
      (24, vec![(i32::MIN,0)], vec![(0,5),(7,i32::MAX)], vec![(i32::MIN,5),(7,i32::MAX)]),
      (25, vec![(i32::MIN,6)], vec![(0,5),(6,i32::MAX)], vec![(i32::MIN,i32::MAX)])
    ];

    for (id, a, b, expected) in sym_cases {
      test_binary_op_sym(format!("test #{} of union", id), a, b, |x, y| union_sweep(x, y), expected);
    }
  }

  #[test]
  fn union_joins_adjacent_cuts() {
    // [1,2] ∪ (2,3] = [1,3] and [1,2) ∪ [2,3] = [1,3]
    let a = vec![SingleRange::new_unchecked(LowerBound(1), UpperBound(2))];
    let b = vec![SingleRange::new_unchecked(UpperBound(2), UpperBound(3))];
    assert_eq!(union_sweep(&a, &b), make_pieces(vec![(1,3)]));
    let a = vec![SingleRange::new_unchecked(LowerBound(1), LowerBound(2))];
    let b = vec![SingleRange::new_unchecked(LowerBound(2), UpperBound(3))];
    assert_eq!(union_sweep(&a, &b), make_pieces(vec![(1,3)]));
    // [1,2) ∪ (2,3] keeps the hole at 2.
    let a = vec![SingleRange::new_unchecked(LowerBound(1), LowerBound(2))];
    let b = vec![SingleRange::new_unchecked(UpperBound(2), UpperBound(3))];
    assert_eq!(union_sweep(&a, &b).len(), 2);
  }

  #[test]
  fn test_intersection() {
    let sym_cases = vec![
      // identity tests
      (1, vec![], vec![], vec![]),
      (2, vec![], vec![(1,2)], vec![]),
      (3, vec![], vec![(1,2),(7,9)], vec![]),
      (4, vec![(1,2),(7,9)], vec![(1,2)], vec![(1,2)]),
      (5, vec![(1,2),(7,9)], vec![(1,2),(7,9)], vec![(1,2),(7,9)]),
      // front tests
      (6, vec![(-3,-1)], vec![(1,2),(7,9)], vec![]),
      (7, vec![(-3,0)], vec![(1,2),(7,9)], vec![]),
      (8, vec![(-3,1)], vec![(1,2),(7,9)], vec![(1,1)]),
      // middle tests
      (9, vec![(2,7)], vec![(1,2),(7,9)], vec![(2,2),(7,7)]),
      (10, vec![(3,7)], vec![(1,2),(7,9)], vec![(7,7)]),
      (11, vec![(4,5)], vec![(1,2),(7,9)], vec![]),
      (12, vec![(2,8)], vec![(1,2),(7,9)], vec![(2,2),(7,8)]),
      (13, vec![(2,6)], vec![(1,2),(7,9)], vec![(2,2)]),
      (14, vec![(3,6)], vec![(1,2),(7,9)], vec![]),
      // back tests
      (15, vec![(8,9)], vec![(1,2),(7,9)], vec![(8,9)]),
      (16, vec![(8,10)], vec![(1,2),(7,9)], vec![(8,9)]),
      (17, vec![(9,10)], vec![(1,2),(7,9)], vec![(9,9)]),
      (18, vec![(6,10)], vec![(1,2),(7,9)], vec![(7,9)]),
      (19, vec![(10,11)], vec![(1,2),(7,9)], vec![]),
      // mixed tests
      (20, vec![(-3,-1),(4,5),(11,12)], vec![(1,2),(7,9)], vec![]),
      (21, vec![(-3,1),(3,7),(9,11)], vec![(1,2),(7,9)], vec![(1,1),(7,7),(9,9)]),
      (22, vec![(-3,5),(7,11)], vec![(1,2),(7,9)], vec![(1,2),(7,9)]),
      (23, vec![(-3,5),(7,8),(12,12)], vec![(1,2),(7,9)], vec![(1,2),(7,8)]),
      // englobing tests
      (24, vec![(-1,11)], vec![(1,2),(7,9)], vec![(1,2),(7,9)]),
      // unbounded tests
      (25, vec![(i32::MIN,i32::MAX)], vec![(1,2),(7,9)], vec![(1,2),(7,9)]),
      (26, vec![(i32::MIN,1),(8,i32::MAX)], vec![(1,2),(7,9)], vec![(1,1),(8,9)])
    ];

    for (id, a, b, expected) in sym_cases {
      test_binary_op_sym(format!("test #{} of intersection", id), a, b, |x, y| intersection_sweep(x, y), expected);
    }
  }

  #[test]
  fn intersection_drops_touching_cuts() {
    // [1,2] ∩ (2,3] is empty, the two intervals only meet at a cut.
    let a = vec![SingleRange::new_unchecked(LowerBound(1), UpperBound(2))];
    let b = vec![SingleRange::new_unchecked(UpperBound(2), UpperBound(3))];
    assert!(intersection_sweep(&a, &b).is_empty());
    assert!(intersection_sweep(&b, &a).is_empty());
  }

  #[test]
  fn test_gaps() {
    let min = i32::MIN;
    let max = i32::MAX;
    let cases = vec![
      (1, vec![], vec![(min, max)]),
      (2, vec![(min, max)], vec![]),
      (3, vec![(0,0)], vec![(min,0),(0,max)]),
      (4, vec![(-5,5)], vec![(min,-5),(5,max)]),
      (5, vec![(-5,-1),(1,5)], vec![(min,-5),(-1,1),(5,max)]),
      (6, vec![(min,-1),(1,5)], vec![(-1,1),(5,max)]),
      (7, vec![(-5,-1),(1,max)], vec![(min,-5),(-1,1)]),
      (8, vec![(min,-1),(1,max)], vec![(-1,1)])
    ];

    for (id, a, expected) in cases {
      let a = make_pieces(a);
      // Gaps are open on the finite side: (-∞,lb), (ub,lb'), (ub,∞).
      let expected: Vec<SingleRange<i32>> = expected.into_iter()
        .map(|(lb, ub)| {
          let lower = if lb == min { NegativeInfinity } else { UpperBound(lb) };
          let upper = if ub == max { PositiveInfinity } else { LowerBound(ub) };
          SingleRange::new_unchecked(lower, upper)
        })
        .collect();
      let result = gaps(&a);
      assert_eq!(result, expected, "test #{} of gaps", id);
      assert!(is_canonical(&result), "test #{} of gaps is not canonical", id);
      assert_eq!(gaps(&result), a, "test #{} of gaps(gaps)", id);
    }
  }

  #[test]
  fn includes() {
    let range = ComplexRange::from_canonical(make_pieces(vec![(1,2),(4,5),(7,9)]));
    for i in vec![1,2,4,5,7,8,9] {
      assert!(range.includes(&i), "{} is not included in {}, but it should.", i, range);
    }
    for i in vec![-1,0,3,6,10,11] {
      assert!(!range.includes(&i), "{} is included in {}, but it should not.", i, range);
    }
    let unbounded = ComplexRange::from_canonical(make_pieces(vec![(i32::MIN,-10),(10,i32::MAX)]));
    assert!(unbounded.includes(&-1000));
    assert!(unbounded.includes(&10));
    assert!(!unbounded.includes(&0));
  }

  #[test]
  fn overlaps_with() {
    let range = ComplexRange::from_canonical(make_pieces(vec![(1,2),(7,9)]));
    assert!(range.overlaps_with(&make_pieces(vec![(2,3)])));
    assert!(range.overlaps_with(&make_pieces(vec![(-5,-4),(9,12)])));
    assert!(!range.overlaps_with(&make_pieces(vec![(3,6)])));
    assert!(!range.overlaps_with(&make_pieces(vec![(-5,0),(3,6),(10,12)])));
    assert!(!range.overlaps_with(&[]));
  }

  #[test]
  fn bounds_and_display() {
    let range = ComplexRange::from_canonical(make_pieces(vec![(i32::MIN,0),(4,5),(7,i32::MAX)]));
    assert_eq!(range.lower(), &NegativeInfinity);
    assert_eq!(range.upper(), &PositiveInfinity);
    assert_eq!(format!("{}", range), "(-∞,0],[4,5],[7,∞)");
  }
}
