// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gcollections::ops::*;
use hypercollections::ops::*;
use hypercollections::Interval;

/// Every non-empty interval with endpoints in `0..4`, including the half-bounded ones and `(-INF, INF)`.
fn non_empty_samples() -> Vec<Interval<i32>> {
  let mut samples = vec![Interval::all()];
  for lb in 0..4 {
    samples.push(Interval::greater_than(lb));
    samples.push(Interval::at_least(lb));
    samples.push(Interval::less_than(lb));
    samples.push(Interval::at_most(lb));
    for ub in lb..4 {
      samples.push(Interval::closed(lb, ub).unwrap());
      if lb < ub {
        samples.push(Interval::open(lb, ub).unwrap());
        samples.push(Interval::open_closed(lb, ub).unwrap());
        samples.push(Interval::closed_open(lb, ub).unwrap());
      }
    }
  }
  samples
}

#[test]
fn samples_are_not_empty() {
  for i in non_empty_samples() {
    assert!(!i.is_empty(), "{} should not be empty", i);
  }
}

#[test]
fn closed_and_open_endpoints() {
  for lb in -3..3 {
    for ub in lb..3 {
      let closed = Interval::closed(lb, ub).unwrap();
      assert!(closed.contains(&lb) && closed.contains(&ub));
      if lb < ub {
        let open = Interval::open(lb, ub).unwrap();
        assert!(!open.contains(&lb) && !open.contains(&ub));
      }
    }
  }
}

#[test]
fn closed_membership_round_trip() {
  for &(lb, ub) in &[(-5, 5), (0, 0), (7, 12)] {
    let i = Interval::closed(lb, ub).unwrap();
    for x in lb..=ub {
      assert!(i.contains(&x));
    }
    assert!(!i.contains(&(lb - 1)));
    assert!(!i.contains(&(ub + 1)));
  }
}

#[test]
fn degenerate_half_open_intervals() {
  for x in -2..2 {
    assert!(Interval::closed_open(x, x).unwrap().is_empty());
    assert!(Interval::open_closed(x, x).unwrap().is_empty());
  }
}

#[test]
fn enclosure() {
  let i1_5 = Interval::closed(1, 5).unwrap();
  let i2_3 = Interval::closed(2, 3).unwrap();
  assert!(i1_5.encloses(&i2_3));
  assert!(!i2_3.encloses(&i1_5));

  let empty: Interval<i32> = Interval::empty();
  assert!(!empty.encloses(&empty));
  for i in non_empty_samples() {
    assert!(Interval::all().encloses(&i), "(-INF, INF) should enclose {}", i);
    assert!(i.encloses(&empty));
    assert!(i.encloses(&i));
  }
}

#[test]
fn intersection_is_idempotent() {
  for i in non_empty_samples() {
    assert_eq!(i.intersection(&i), i);
  }
}

#[test]
fn span_and_intersection_commute() {
  let samples = non_empty_samples();
  for a in &samples {
    for b in &samples {
      assert_eq!(a.span(b), b.span(a), "span of {} and {}", a, b);
      assert_eq!(a.intersection(b), b.intersection(a), "intersection of {} and {}", a, b);
    }
  }
}

#[test]
fn span_encloses_both_operands() {
  let samples = non_empty_samples();
  for a in &samples {
    for b in &samples {
      let span = a.span(b);
      assert!(span.encloses(a) && span.encloses(b), "{} should enclose {} and {}", span, a, b);
    }
  }
}

#[test]
fn touching_intervals() {
  let a = Interval::closed(1, 10).unwrap();
  let b = Interval::open(10, 20).unwrap();
  assert!(a.intersection(&b).is_empty());
  assert_eq!(a.span(&b), Interval::closed_open(1, 20).unwrap());
  assert_eq!(a.span(&b).to_string(), "[1, 20)");
}

#[test]
fn half_bounded_membership() {
  assert!(Interval::at_least(5).contains(&5));
  assert!(!Interval::at_least(5).contains(&4));
  assert!(!Interval::less_than(5).contains(&5));
}

#[test]
fn empty_equality_quirk() {
  let canonical: Interval<i32> = Interval::empty();
  let degenerate = Interval::closed_open(4, 4).unwrap();
  assert!(canonical.is_empty() && degenerate.is_empty());
  assert_ne!(canonical, degenerate);
  assert_eq!(canonical, Interval::whole());
}

#[test]
fn canonical_empty_is_judged_on_its_unbounded_sides() {
  let canonical: Interval<i32> = Interval::empty();
  let one_to_five = Interval::closed(1, 5).unwrap();
  assert!(canonical.contains(&0));
  assert!(canonical.contains(&i32::max_value()));
  assert!(canonical.encloses(&one_to_five));
  assert!(!canonical.encloses(&Interval::empty()));
  assert!(one_to_five.encloses(&canonical));
  assert!(canonical.span(&Interval::closed(1, 2).unwrap()).is_empty());
  assert_eq!(Interval::closed(1, 2).unwrap().span(&canonical), Interval::closed(1, 2).unwrap());
}

#[test]
fn non_integer_domain() {
  let words = Interval::closed_open("apple", "melon").unwrap();
  assert!(words.contains(&"banana"));
  assert!(!words.contains(&"melon"));
  assert_eq!(words.span(&Interval::at_least("pear")), Interval::at_least("apple"));
  assert_eq!(words.to_string(), "[apple, melon)");
  assert!(!words.is_empty());
  assert!(Interval::closed_open("kiwi", "kiwi").unwrap().is_empty());
}
