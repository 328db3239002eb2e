// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed sequence of elements, read-only once built.

use crate::error::{Error, Result};
use gcollections::kind::*;
use gcollections::ops::*;
use std::iter::FromIterator;
use std::slice::Iter;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImmutableCollection<E>
{
  elements: Vec<E>
}

impl<E> ImmutableCollection<E>
{
  pub fn of<I>(elements: I) -> ImmutableCollection<E> where
   I: IntoIterator<Item=E>
  {
    ImmutableCollection {
      elements: elements.into_iter().collect()
    }
  }

  /// Fails on the first absent element.
  pub fn try_of<I>(elements: I) -> Result<ImmutableCollection<E>> where
   I: IntoIterator<Item=Option<E>>
  {
    let elements = elements.into_iter()
      .map(|element| element.ok_or(Error::InvalidArgument("elements cannot be absent")))
      .collect::<Result<Vec<E>>>()?;
    Ok(ImmutableCollection { elements: elements })
  }

  pub fn iter(&self) -> Iter<E> {
    self.elements.iter()
  }
}

impl<E> Default for ImmutableCollection<E>
{
  fn default() -> ImmutableCollection<E> {
    ImmutableCollection { elements: vec![] }
  }
}

impl<E> FromIterator<E> for ImmutableCollection<E>
{
  fn from_iter<I>(iterable: I) -> ImmutableCollection<E> where
   I: IntoIterator<Item=E>
  {
    ImmutableCollection::of(iterable)
  }
}

impl<E> Collection for ImmutableCollection<E>
{
  type Item = E;
}

impl<E> Contains for ImmutableCollection<E> where
 E: PartialEq
{
  fn contains(&self, element: &E) -> bool {
    self.elements.iter().any(|e| e == element)
  }
}

impl<E> Cardinality for ImmutableCollection<E>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.elements.len()
  }
}
