// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised by the interval factories and the collections.
//!
//! Every check happens before any state is touched, so a failed call leaves the receiver unchanged.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A required argument is absent or out of its domain.
  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),
  /// The lower endpoint is not in the order required by the factory.
  #[error("invalid bounds: lower endpoint must be {0} the upper endpoint")]
  InvalidBounds(&'static str),
  #[error("the key or the value is already present in the map")]
  DuplicateKeyOrValue,
  #[error("no such element")]
  NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    assert_eq!(Error::InvalidBounds("less than").to_string(),
      "invalid bounds: lower endpoint must be less than the upper endpoint");
    assert_eq!(Error::InvalidArgument("capacity must be positive").to_string(),
      "invalid argument: capacity must be positive");
    assert_eq!(Error::NotFound.to_string(), "no such element");
  }
}
