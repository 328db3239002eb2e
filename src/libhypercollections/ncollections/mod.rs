// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Small containers built over the standard collections.
//!
//! They share the generic vocabulary of `gcollections::ops` (`Cardinality`, which also gives them `IsEmpty`, and `Contains` where it makes sense), so they can be used by algorithms written against those traits.
//!
//! # Examples
//!
//! ```rust
//! use hypercollections::ncollections::{BiMap, Multiset, SizeLimitedQueue};
//! use gcollections::ops::*;
//!
//! let mut codes = BiMap::new();
//! codes.put("fr", 33).unwrap();
//! assert!(codes.put("be", 33).is_err());
//! assert_eq!(codes.inverse().get(&33), Some(&"fr"));
//!
//! let words: Multiset<_> = "to be or not to be".split(' ').collect();
//! assert_eq!(words.count(&"be"), 2);
//! assert_eq!(words.size(), 6);
//!
//! let mut recent = SizeLimitedQueue::new(2).unwrap();
//! recent.add(1);
//! recent.add(2);
//! assert_eq!(recent.add(3), Some(1));
//! ```

pub mod bimap;
pub mod immutable;
pub mod multiset;
pub mod size_limited_queue;

pub use crate::ncollections::bimap::BiMap;
pub use crate::ncollections::immutable::ImmutableCollection;
pub use crate::ncollections::multiset::Multiset;
pub use crate::ncollections::size_limited_queue::SizeLimitedQueue;
