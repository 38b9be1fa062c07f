#![no_std]
#![allow(clippy::tabs_in_doc_comments)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod error;
mod handle;
mod iterator;
mod optional;
mod slot;
pub use error::OptionalError;
pub use handle::{Handle, OwnedPtr};
pub use iterator::Iter;
pub use optional::Optional;
pub use slot::Slot;
