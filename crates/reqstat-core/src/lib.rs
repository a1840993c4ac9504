//! reqstat core: request counter, line-protocol encoding and the shared error
//! surface.
//!
//! This crate carries no runtime or HTTP dependencies so it can be tested on
//! its own and reused by any transport.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod line;

pub use counter::RequestCounter;
pub use error::{Result, StatsError, StatusClass};
pub use line::{requests_line, Point};
