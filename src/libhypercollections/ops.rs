// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval specific operations.
//!
//! Set operations shared with other collections (`Contains`, `Intersection`, `IsEmpty`, ...) come from `gcollections::ops`.

use num_integer::Integer;
use num_traits::Bounded as NumBounded;
use num_traits::Unsigned;

/// Smallest interval enclosing both operands, gaps included.
pub trait Span<RHS = Self>
{
  type Output;
  fn span(&self, rhs: &RHS) -> Self::Output;
}

/// `a.encloses(b)` holds when every value of `b` is a value of `a`.
pub trait Encloses<RHS = Self>
{
  fn encloses(&self, rhs: &RHS) -> bool;
}

pub trait Whole
{
  fn whole() -> Self;
}

/// Number of values of a discrete type lying between two bounds.
///
/// Unbounded sides of an interval over such a type stand for `min_value()` and `max_value()` of `num_traits::Bounded`.
pub trait Width : Ord + Clone + NumBounded
{
  type Output: Unsigned + Integer + Clone;

  /// Size of `[lower, upper]`, `None` when it overflows `Output`, which only happens for the whole type.
  fn width(lower: &Self, upper: &Self) -> Option<Self::Output>;
}

macro_rules! unsigned_width_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Width for $t
    {
      type Output = $t;

      fn width(lower: &$t, upper: &$t) -> Option<$t> {
        debug_assert!(lower <= upper);
        (*upper - *lower).checked_add(1)
      }
    }
  )*}
}

macro_rules! signed_width_impl
{
  ( $( $t: ty, $u: ty ),* ) =>
  {$(
    impl Width for $t
    {
      type Output = $u;

      fn width(lower: &$t, upper: &$t) -> Option<$u> {
        debug_assert!(lower <= upper);
        // Two's complement: the difference is exact modulo 2^bits and never exceeds `$u::MAX`.
        (*upper as $u).wrapping_sub(*lower as $u).checked_add(1)
      }
    }
  )*}
}

unsigned_width_impl!(u8,u16,u32,u64,usize);
signed_width_impl!(i8,u8,i16,u16,i32,u32,i64,u64,isize,usize);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unsigned_width() {
    assert_eq!(<u8 as Width>::width(&0, &0), Some(1));
    assert_eq!(<u8 as Width>::width(&3, &7), Some(5));
    assert_eq!(<u8 as Width>::width(&0, &254), Some(255));
    assert_eq!(<u8 as Width>::width(&1, &255), Some(255));
    assert_eq!(<u8 as Width>::width(&0, &255), None);
  }

  #[test]
  fn signed_width() {
    assert_eq!(<i32 as Width>::width(&-5, &5), Some(11u32));
    assert_eq!(<i32 as Width>::width(&-30, &-20), Some(11u32));
    assert_eq!(<i32 as Width>::width(&i32::min_value(), &i32::min_value()), Some(1u32));
    assert_eq!(<i8 as Width>::width(&-128, &126), Some(255u8));
    assert_eq!(<i8 as Width>::width(&-128, &127), None);
  }
}
