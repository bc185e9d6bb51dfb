// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Each operator is implemented once on `&Range<T>`, the owned combinations borrow and forward to it.
macro_rules! range_binop {
  ( $( $imp:ident, $method:ident, $delegate:ident );* ) =>
  {$(
    impl<'a, 'b, T: Ord + Clone> $imp<&'b Range<T>> for &'a Range<T> {
      type Output = Range<T>;

      fn $method(self, other: &'b Range<T>) -> Range<T> {
        Range::$delegate(self, other)
      }
    }

    impl<T: Ord + Clone> $imp<Range<T>> for Range<T> {
      type Output = Range<T>;

      fn $method(self, other: Range<T>) -> Range<T> {
        Range::$delegate(&self, &other)
      }
    }

    impl<'a, T: Ord + Clone> $imp<Range<T>> for &'a Range<T> {
      type Output = Range<T>;

      fn $method(self, other: Range<T>) -> Range<T> {
        Range::$delegate(self, &other)
      }
    }

    impl<'b, T: Ord + Clone> $imp<&'b Range<T>> for Range<T> {
      type Output = Range<T>;

      fn $method(self, other: &'b Range<T>) -> Range<T> {
        Range::$delegate(&self, other)
      }
    }
  )*}
}

// Forwards a `gcollections` binary set operation to the inherent method of `Range`.
macro_rules! range_set_op {
  ( $( $imp:ident, $method:ident, $delegate:ident );* ) =>
  {$(
    impl<T: Ord + Clone> $imp for Range<T> {
      type Output = Range<T>;

      fn $method(&self, other: &Range<T>) -> Range<T> {
        Range::$delegate(self, other)
      }
    }
  )*}
}
