// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! FIFO queue of bounded capacity which evicts its oldest element on overflow.

use crate::error::{Error, Result};
use gcollections::ops::*;
use log::trace;
use std::collections::vec_deque::{Iter, VecDeque};
use std::fmt::{self, Debug, Formatter};

#[derive(Clone, PartialEq, Eq)]
pub struct SizeLimitedQueue<E>
{
  limit: usize,
  queue: VecDeque<E>
}

impl<E> SizeLimitedQueue<E>
{
  /// Fails if `limit` is zero.
  pub fn new(limit: usize) -> Result<SizeLimitedQueue<E>> {
    if limit == 0 {
      return Err(Error::InvalidArgument("the capacity of a queue must be positive"));
    }
    Ok(SizeLimitedQueue {
      limit: limit,
      queue: VecDeque::with_capacity(limit)
    })
  }

  /// Appends `element`, returning the evicted oldest element if the queue was full.
  pub fn add(&mut self, element: E) -> Option<E> {
    let evicted =
      if self.is_at_full_capacity() {
        trace!("size limited queue: capacity {} reached, evicting the oldest element", self.limit);
        self.queue.pop_front()
      }
      else {
        None
      };
    self.queue.push_back(element);
    evicted
  }

  pub fn peek(&self) -> Result<&E> {
    self.queue.front().ok_or(Error::NotFound)
  }

  pub fn remove(&mut self) -> Result<E> {
    self.queue.pop_front().ok_or(Error::NotFound)
  }

  pub fn clear(&mut self) {
    self.queue.clear();
  }

  pub fn is_at_full_capacity(&self) -> bool {
    self.queue.len() == self.limit
  }

  pub fn max_size(&self) -> usize {
    self.limit
  }

  /// From the oldest to the newest element.
  pub fn iter(&self) -> Iter<E> {
    self.queue.iter()
  }
}

impl<E> SizeLimitedQueue<E> where
 E: Clone
{
  pub fn to_vec(&self) -> Vec<E> {
    self.queue.iter().cloned().collect()
  }
}

impl<E> Cardinality for SizeLimitedQueue<E>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.queue.len()
  }
}

impl<E> Debug for SizeLimitedQueue<E> where
 E: Debug
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.debug_list().entries(self.queue.iter()).finish()
  }
}
