// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generic interval over a totally ordered domain.
//!
//! Each side of an interval is either unbounded or a finite endpoint which is included or excluded. An interval is immutable: every operation builds a new value.
//!
//! Emptiness has two sources. The dedicated empty constructors (`Interval::empty()`, and `open_closed`/`closed_open` on equal endpoints) set an explicit marker, while other intervals are empty when their bounds cross or meet on an excluded side. The marker is not part of equality: `Interval::empty() == Interval::all()` because both have two unbounded sides, whereas `closed_open(3, 3)` keeps its endpoints and differs from `Interval::empty()`.
//!
//! # Examples
//!
//! ```rust
//! use hypercollections::Interval;
//! use hypercollections::ops::*;
//! use gcollections::ops::*;
//!
//! let a = Interval::closed(1, 10).unwrap();
//! let b = Interval::open(10, 20).unwrap();
//!
//! assert!(a.intersection(&b).is_empty());
//! assert_eq!(a.span(&b), Interval::closed_open(1, 20).unwrap());
//! assert!(a.contains(&10) && !b.contains(&10));
//! assert_eq!(a.span(&b).to_string(), "[1, 20)");
//! ```

use crate::error::{Error, Result};
use crate::ops::*;
use gcollections::kind::*;
use gcollections::ops::*;
use num_traits::Bounded as NumBounded;
use num_traits::{CheckedAdd, CheckedSub, Num, Zero};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

#[derive(Debug, Clone, Copy)]
pub struct Interval<Bound> {
  lower: Option<Bound>,
  upper: Option<Bound>,
  lower_inclusive: bool,
  upper_inclusive: bool,
  empty: bool
}

impl<Bound> Interval<Bound>
{
  fn from_parts(lower: Option<Bound>, upper: Option<Bound>,
    lower_inclusive: bool, upper_inclusive: bool) -> Interval<Bound>
  {
    // The inclusivity of an unbounded side is meaningless, normalize it.
    let lower_inclusive = lower_inclusive && lower.is_some();
    let upper_inclusive = upper_inclusive && upper.is_some();
    Interval {
      lower: lower,
      upper: upper,
      lower_inclusive: lower_inclusive,
      upper_inclusive: upper_inclusive,
      empty: false
    }
  }

  /// Empty interval produced by a half-open factory on equal endpoints.
  fn degenerate(lower: Bound, upper: Bound) -> Interval<Bound> {
    Interval {
      lower: Some(lower),
      upper: Some(upper),
      lower_inclusive: false,
      upper_inclusive: false,
      empty: true
    }
  }

  /// `(-INF, INF)`.
  pub fn all() -> Interval<Bound> {
    Interval::from_parts(None, None, false, false)
  }

  pub fn lower_endpoint(&self) -> Option<&Bound> {
    self.lower.as_ref()
  }

  pub fn upper_endpoint(&self) -> Option<&Bound> {
    self.upper.as_ref()
  }

  pub fn has_lower_bound(&self) -> bool {
    self.lower.is_some()
  }

  pub fn has_upper_bound(&self) -> bool {
    self.upper.is_some()
  }

  /// Always `false` when the lower side is unbounded.
  pub fn lower_inclusive(&self) -> bool {
    self.lower_inclusive
  }

  /// Always `false` when the upper side is unbounded.
  pub fn upper_inclusive(&self) -> bool {
    self.upper_inclusive
  }
}

impl<Bound> Interval<Bound> where
 Bound: Ord
{
  /// `(lower, upper)`, fails unless `lower < upper`.
  pub fn open(lower: Bound, upper: Bound) -> Result<Interval<Bound>> {
    if lower >= upper {
      return Err(Error::InvalidBounds("less than"));
    }
    Ok(Interval::from_parts(Some(lower), Some(upper), false, false))
  }

  /// `[lower, upper]`, fails unless `lower <= upper`.
  pub fn closed(lower: Bound, upper: Bound) -> Result<Interval<Bound>> {
    if lower > upper {
      return Err(Error::InvalidBounds("less than or equal to"));
    }
    Ok(Interval::from_parts(Some(lower), Some(upper), true, true))
  }

  /// `(lower, upper]`. Equal endpoints give an empty interval rather than an error.
  pub fn open_closed(lower: Bound, upper: Bound) -> Result<Interval<Bound>> {
    match lower.cmp(&upper) {
      Ordering::Less => Ok(Interval::from_parts(Some(lower), Some(upper), false, true)),
      Ordering::Equal => Ok(Interval::degenerate(lower, upper)),
      Ordering::Greater => Err(Error::InvalidBounds("less than"))
    }
  }

  /// `[lower, upper)`. Equal endpoints give an empty interval rather than an error.
  pub fn closed_open(lower: Bound, upper: Bound) -> Result<Interval<Bound>> {
    match lower.cmp(&upper) {
      Ordering::Less => Ok(Interval::from_parts(Some(lower), Some(upper), true, false)),
      Ordering::Equal => Ok(Interval::degenerate(lower, upper)),
      Ordering::Greater => Err(Error::InvalidBounds("less than"))
    }
  }

  /// `(lower, INF)`.
  pub fn greater_than(lower: Bound) -> Interval<Bound> {
    Interval::from_parts(Some(lower), None, false, false)
  }

  /// `[lower, INF)`.
  pub fn at_least(lower: Bound) -> Interval<Bound> {
    Interval::from_parts(Some(lower), None, true, false)
  }

  /// `(-INF, upper)`.
  pub fn less_than(upper: Bound) -> Interval<Bound> {
    Interval::from_parts(None, Some(upper), false, false)
  }

  /// `(-INF, upper]`.
  pub fn at_most(upper: Bound) -> Interval<Bound> {
    Interval::from_parts(None, Some(upper), false, true)
  }

  fn encloses_lower(&self, other: &Interval<Bound>) -> bool {
    match (&self.lower, &other.lower) {
      (None, _) => true,
      (Some(_), None) => false,
      (Some(lb), Some(other_lb)) =>
        match lb.cmp(other_lb) {
          Ordering::Less => true,
          Ordering::Equal => self.lower_inclusive || !other.lower_inclusive,
          Ordering::Greater => false
        }
    }
  }

  fn encloses_upper(&self, other: &Interval<Bound>) -> bool {
    match (&self.upper, &other.upper) {
      (None, _) => true,
      (Some(_), None) => false,
      (Some(ub), Some(other_ub)) =>
        match ub.cmp(other_ub) {
          Ordering::Greater => true,
          Ordering::Equal => self.upper_inclusive || !other.upper_inclusive,
          Ordering::Less => false
        }
    }
  }

  /// Builds the result of a derived operation, collapsing crossed or zero-width bounds to the empty interval.
  fn assemble(lower: Option<Bound>, lower_inclusive: bool,
    upper: Option<Bound>, upper_inclusive: bool) -> Interval<Bound>
  {
    match (&lower, &upper) {
      (Some(lb), Some(ub)) => {
        match lb.cmp(ub) {
          Ordering::Greater => return Interval::empty(),
          Ordering::Equal if !(lower_inclusive && upper_inclusive) => return Interval::empty(),
          _ => ()
        }
      }
      (None, None) => return Interval::all(),
      _ => ()
    }
    Interval::from_parts(lower, upper, lower_inclusive, upper_inclusive)
  }
}

impl<Bound> Interval<Bound> where
 Bound: Ord + Clone
{
  /// `[value, value]`.
  pub fn singleton(value: Bound) -> Interval<Bound> {
    Interval::from_parts(Some(value.clone()), Some(value), true, true)
  }
}

impl<Bound> Empty for Interval<Bound>
{
  fn empty() -> Interval<Bound> {
    Interval {
      lower: None,
      upper: None,
      lower_inclusive: false,
      upper_inclusive: false,
      empty: true
    }
  }
}

impl<Bound> Whole for Interval<Bound>
{
  fn whole() -> Interval<Bound> {
    Interval::all()
  }
}

impl<Bound> Collection for Interval<Bound>
{
  type Item = Bound;
}

impl<Bound> IsEmpty for Interval<Bound> where
 Bound: Ord
{
  fn is_empty(&self) -> bool {
    if self.empty {
      return true;
    }
    match (&self.lower, &self.upper) {
      (Some(lb), Some(ub)) =>
        match lb.cmp(ub) {
          Ordering::Less => false,
          Ordering::Equal => !(self.lower_inclusive && self.upper_inclusive),
          Ordering::Greater => true
        },
      _ => false
    }
  }
}

impl<Bound> Contains for Interval<Bound> where
 Bound: Ord
{
  /// Only looks at the bounds, so `Interval::empty()`, being unbounded on both sides, contains every value.
  fn contains(&self, value: &Bound) -> bool {
    let above_lower = match &self.lower {
      None => true,
      Some(lb) if self.lower_inclusive => value >= lb,
      Some(lb) => value > lb
    };
    let below_upper = match &self.upper {
      None => true,
      Some(ub) if self.upper_inclusive => value <= ub,
      Some(ub) => value < ub
    };
    above_lower && below_upper
  }
}

impl<Bound> Encloses for Interval<Bound> where
 Bound: Ord
{
  /// An empty interval is enclosed by every non-empty one but not by another empty interval. An empty receiver is otherwise judged on its bounds.
  fn encloses(&self, other: &Interval<Bound>) -> bool {
    if other.is_empty() {
      !self.is_empty()
    }
    else {
      self.encloses_lower(other) && self.encloses_upper(other)
    }
  }
}

impl<Bound> Span for Interval<Bound> where
 Bound: Ord + Clone
{
  type Output = Interval<Bound>;

  fn span(&self, other: &Interval<Bound>) -> Interval<Bound> {
    if self.is_empty() && other.is_empty() {
      return Interval::empty();
    }
    if self.encloses(other) {
      return self.clone();
    }
    if other.encloses(self) {
      return other.clone();
    }
    // `self` lies entirely before `other` and both facing endpoints are included.
    if let (Some(ub), Some(other_lb)) = (&self.upper, &other.lower) {
      if ub < other_lb && self.upper_inclusive && other.lower_inclusive {
        return Interval::from_parts(
          self.lower.clone(), other.upper.clone(),
          self.lower_inclusive, other.upper_inclusive);
      }
    }

    let (lower, lower_inclusive) = match (&self.lower, &other.lower) {
      (Some(lb), Some(other_lb)) =>
        match lb.cmp(other_lb) {
          Ordering::Less => (Some(lb.clone()), self.lower_inclusive),
          Ordering::Equal => (Some(lb.clone()), self.lower_inclusive || other.lower_inclusive),
          Ordering::Greater => (Some(other_lb.clone()), other.lower_inclusive)
        },
      _ => (None, false)
    };
    let (upper, upper_inclusive) = match (&self.upper, &other.upper) {
      (Some(ub), Some(other_ub)) =>
        match ub.cmp(other_ub) {
          Ordering::Greater => (Some(ub.clone()), self.upper_inclusive),
          Ordering::Equal => (Some(ub.clone()), self.upper_inclusive || other.upper_inclusive),
          Ordering::Less => (Some(other_ub.clone()), other.upper_inclusive)
        },
      _ => (None, false)
    };
    Interval::assemble(lower, lower_inclusive, upper, upper_inclusive)
  }
}

impl<Bound> Intersection for Interval<Bound> where
 Bound: Ord + Clone
{
  type Output = Interval<Bound>;

  fn intersection(&self, other: &Interval<Bound>) -> Interval<Bound> {
    if self.is_empty() || other.is_empty() {
      return Interval::empty();
    }

    let (lower, lower_inclusive) = match (&self.lower, &other.lower) {
      (None, None) => (None, false),
      (None, Some(other_lb)) => (Some(other_lb.clone()), other.lower_inclusive),
      (Some(lb), None) => (Some(lb.clone()), self.lower_inclusive),
      (Some(lb), Some(other_lb)) =>
        match lb.cmp(other_lb) {
          Ordering::Greater => (Some(lb.clone()), self.lower_inclusive),
          Ordering::Equal => (Some(lb.clone()), self.lower_inclusive && other.lower_inclusive),
          Ordering::Less => (Some(other_lb.clone()), other.lower_inclusive)
        }
    };
    let (upper, upper_inclusive) = match (&self.upper, &other.upper) {
      (None, None) => (None, false),
      (None, Some(other_ub)) => (Some(other_ub.clone()), other.upper_inclusive),
      (Some(ub), None) => (Some(ub.clone()), self.upper_inclusive),
      (Some(ub), Some(other_ub)) =>
        match ub.cmp(other_ub) {
          Ordering::Less => (Some(ub.clone()), self.upper_inclusive),
          Ordering::Equal => (Some(ub.clone()), self.upper_inclusive && other.upper_inclusive),
          Ordering::Greater => (Some(other_ub.clone()), other.upper_inclusive)
        }
    };
    Interval::assemble(lower, lower_inclusive, upper, upper_inclusive)
  }
}

// The empty marker takes no part in equality and hashing.
impl<Bound> PartialEq for Interval<Bound> where
 Bound: PartialEq
{
  fn eq(&self, other: &Interval<Bound>) -> bool {
    self.lower == other.lower
    && self.upper == other.upper
    && self.lower_inclusive == other.lower_inclusive
    && self.upper_inclusive == other.upper_inclusive
  }
}

impl<Bound> Eq for Interval<Bound> where
 Bound: Eq
{}

impl<Bound> Hash for Interval<Bound> where
 Bound: Hash
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.lower.hash(state);
    self.upper.hash(state);
    self.lower_inclusive.hash(state);
    self.upper_inclusive.hash(state);
  }
}

impl<Bound> Display for Interval<Bound> where
 Bound: Display
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    if self.empty {
      return formatter.write_str("EMPTY");
    }
    formatter.write_str(if self.lower_inclusive { "[" } else { "(" })?;
    match &self.lower {
      Some(lb) => write!(formatter, "{}", lb)?,
      None => formatter.write_str("-INF")?
    }
    formatter.write_str(", ")?;
    match &self.upper {
      Some(ub) => write!(formatter, "{}", ub)?,
      None => formatter.write_str("INF")?
    }
    formatter.write_str(if self.upper_inclusive { "]" } else { ")" })
  }
}

// Discrete domains.

impl<Bound> Interval<Bound> where
 Bound: Width + Num + CheckedAdd + CheckedSub
{
  /// Smallest and largest members, unbounded sides standing for the limits of the type.
  fn discrete_bounds(&self) -> Option<(Bound, Bound)> {
    if self.is_empty() {
      return None;
    }
    let first = match &self.lower {
      None => <Bound as NumBounded>::min_value(),
      Some(lb) if self.lower_inclusive => lb.clone(),
      Some(lb) => lb.checked_add(&Bound::one())?
    };
    let last = match &self.upper {
      None => <Bound as NumBounded>::max_value(),
      Some(ub) if self.upper_inclusive => ub.clone(),
      Some(ub) => ub.checked_sub(&Bound::one())?
    };
    if first <= last { Some((first, last)) } else { None }
  }

  pub fn first(&self) -> Option<Bound> {
    self.discrete_bounds().map(|(first, _)| first)
  }

  pub fn last(&self) -> Option<Bound> {
    self.discrete_bounds().map(|(_, last)| last)
  }

  /// Members in ascending order.
  pub fn iter(&self) -> Iter<Bound> {
    Iter {
      remaining: self.discrete_bounds()
    }
  }

  /// Number of members, `None` when it does not fit in `Width::Output` (every value of the type).
  pub fn size(&self) -> Option<<Bound as Width>::Output> {
    match self.discrete_bounds() {
      Some((first, last)) => <Bound as Width>::width(&first, &last),
      None => Some(<<Bound as Width>::Output as Zero>::zero())
    }
  }
}

pub struct Iter<Bound> {
  remaining: Option<(Bound, Bound)>
}

impl<Bound> Iterator for Iter<Bound> where
 Bound: Width + Num + CheckedAdd
{
  type Item = Bound;

  fn next(&mut self) -> Option<Bound> {
    let (current, last) = self.remaining.take()?;
    if current < last {
      self.remaining = current.checked_add(&Bound::one()).map(|next| (next, last));
    }
    Some(current)
  }
}

pub trait ToInterval<Bound> {
  fn to_interval(self) -> Interval<Bound>;
}

impl<Bound> ToInterval<Bound> for Interval<Bound> {
  fn to_interval(self) -> Interval<Bound> { self }
}

impl<Bound> ToInterval<Bound> for () {
  fn to_interval(self) -> Interval<Bound> {
    Interval::empty()
  }
}

impl<Bound> ToInterval<Bound> for RangeFull {
  fn to_interval(self) -> Interval<Bound> {
    Interval::all()
  }
}

impl<Bound: Ord> ToInterval<Bound> for RangeFrom<Bound> {
  fn to_interval(self) -> Interval<Bound> {
    Interval::at_least(self.start)
  }
}

impl<Bound: Ord> ToInterval<Bound> for RangeTo<Bound> {
  fn to_interval(self) -> Interval<Bound> {
    Interval::less_than(self.end)
  }
}

impl<Bound: Ord> ToInterval<Bound> for RangeToInclusive<Bound> {
  fn to_interval(self) -> Interval<Bound> {
    Interval::at_most(self.end)
  }
}

macro_rules! singleton_to_interval_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl ToInterval<$t> for $t {
      fn to_interval(self) -> Interval<$t> {
        Interval::singleton(self)
      }
    }
  )*}
}

singleton_to_interval_impl!(i8,u8,i16,u16,i32,u32,i64,u64,isize,usize,char);

impl<Bound: Ord> TryFrom<std::ops::Range<Bound>> for Interval<Bound> {
  type Error = Error;

  fn try_from(range: std::ops::Range<Bound>) -> Result<Interval<Bound>> {
    Interval::closed_open(range.start, range.end)
  }
}

impl<Bound: Ord> TryFrom<RangeInclusive<Bound>> for Interval<Bound> {
  type Error = Error;

  fn try_from(range: RangeInclusive<Bound>) -> Result<Interval<Bound>> {
    let (lower, upper) = range.into_inner();
    Interval::closed(lower, upper)
  }
}
