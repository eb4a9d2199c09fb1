//! Comparator-ordered containers with interchangeable backings.
//!
//! A container keeps arbitrary values sorted by a comparator supplied at
//! creation. Callers insert, look up, delete through handles, and walk the
//! contents in order, without caring how the elements are stored.
//!
//! # Backings
//!
//! Two strategies implement the same [`OrderedContainer`] contract:
//!
//! ```text
//! SortedArray - contiguous, binary search, shifts on insert/remove
//! SortedList  - linked nodes, linear scan, O(1) splice on remove
//! ```
//!
//! | Backing | `find` | `insert` | `remove` | Handle lifetime |
//! |---------|--------|----------|----------|-----------------|
//! | [`SortedArray`] | O(log n) | O(n) | O(n) | until any mutation |
//! | [`SortedList`] | O(n) | O(n) | O(1) | until that node is removed |
//!
//! [`Container`] picks one at runtime from a [`Backing`] value.
//!
//! # Quick Start
//!
//! ```
//! use core::ops::ControlFlow;
//! use nexus_ordered::{OrderedContainer, SortedArray};
//!
//! // Order records by id
//! type Book = (u32, &'static str);
//! let mut books: SortedArray<Book, _> = SortedArray::new(|a: &Book, b: &Book| a.0.cmp(&b.0));
//! books.insert((3, "Dune"));
//! books.insert((1, "Emma"));
//! books.insert((2, "Ulysses"));
//!
//! // Look up by id alone
//! let handle = books.find_with(&2, |id: &u32, book: &Book| id.cmp(&book.0));
//! let handle = handle.unwrap();
//! assert_eq!(books.get(handle), Some(&(2, "Ulysses")));
//!
//! // Walk in order, stopping early
//! let long_title = books.apply_if(|book| {
//!     if book.1.len() > 4 { ControlFlow::Break(book.0) } else { ControlFlow::Continue(()) }
//! });
//! assert_eq!(long_title, Some(2));
//! ```
//!
//! # Handles
//!
//! `insert` and `find` return a handle that `get` and `remove` accept.
//! Array handles die on the next mutation of the container; list handles
//! live as long as their node. Both backings answer `None` for a handle
//! they detect as stale rather than touching another element. See
//! [`handle`] for the details.
//!
//! # Usage Accounting
//!
//! Every container reports to a [`Registry`]: live containers, live items,
//! and allocated item slots. Containers built with `new_in` share the
//! registry they are given.
//!
//! ```
//! use nexus_ordered::{Backing, Container, Natural, OrderedContainer, Registry};
//!
//! let registry = Registry::new();
//! let mut c: Container<u32> = Container::new_in(Backing::Array, Natural, &registry);
//! c.insert(1);
//!
//! println!("{}", registry.usage());
//! // Containers: 1
//! // Container items in use: 1
//! // Container items allocated: 3
//! ```
//!
//! # Threading
//!
//! Containers and registries are single-threaded (`!Send`, `!Sync`).

#![warn(missing_docs)]

pub mod apply;
pub mod array;
pub mod compare;
pub mod config;
pub mod container;
pub mod error;
pub mod handle;
pub mod list;
mod nodes;
pub mod ordered;
pub mod usage;

pub use apply::Apply;
pub use array::{Search, SortedArray};
pub use compare::{Compare, Natural, Reversed};
pub use config::GrowthPolicy;
pub use container::{Backing, Container};
pub use error::Error;
pub use handle::{ArrayHandle, Handle, ListHandle};
pub use list::SortedList;
pub use ordered::OrderedContainer;
pub use usage::{Registry, Usage};
