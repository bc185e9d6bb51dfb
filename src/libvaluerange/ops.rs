// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Range specific operations.
//!
//! Set operations (union, intersection, complement, membership,...) are the generic traits of `gcollections::ops`, the traits below only make sense on ranges.

/// Smallest contiguous interval containing both operands.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// The range containing every value of the domain.
pub trait Whole
{
  fn whole() -> Self;
}
