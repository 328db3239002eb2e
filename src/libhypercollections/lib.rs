// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides a generic interval type over any totally ordered domain, with finite endpoints that are either included or excluded and sides that may be unbounded. A second part of this library gathers a few small containers (bidirectional map, multiset, size-limited queue and immutable collection).
//!
//! Generic operations are expressed with the traits of [gcollections](https://docs.rs/gcollections), interval specific ones (`Span`, `Encloses`, `Whole`) are in the [ops module](ops/index.html).
//!
//! # Examples
//!
//! For examples see the [interval module](interval/index.html) or the [ncollections module](ncollections/index.html).
//!
//! # References
//! * [Guava Ranges Explained](https://github.com/google/guava/wiki/RangesExplained)
//!

pub mod error;
pub mod interval;
pub mod ncollections;
pub mod ops;

pub use crate::error::{Error, Result};
pub use crate::interval::Interval;
