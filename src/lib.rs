//! A scope guard binds a cleanup closure to the lifetime of a lexical scope
//! and runs it when the scope is left, even if the code in between panics
//! (as long as panic unwinds rather than aborts).
//!
//! Three firing policies are provided as [`Strategy`] types:
//!
//! - [`Always`]: run on any scope exit, regular return or unwinding.
//! - [`OnSuccess`]: run only if no *new* panic started unwinding inside the
//!   guard's scope.
//! - [`OnUnwind`]: run only if a new panic *did* start unwinding inside the
//!   guard's scope.
//!
//! `OnSuccess` and `OnUnwind` record the ambient unwinding state of the
//! current thread when the guard is created and compare against it when the
//! guard is dropped. A guard created inside a destructor that is already
//! running because of an unrelated, older panic therefore still discriminates
//! correctly: `OnSuccess` fires and `OnUnwind` stays quiet, because no new
//! unwind began on the guard's own watch.
//!
//! Every guard can be permanently disarmed with
//! [`release`](ScopeGuard::release), and a guard that owns a protected value
//! can be disarmed while recovering the value with
//! [`into_inner`](ScopeGuard::into_inner). Both are one-way: a disarmed
//! guard never fires.
//!
//! # Examples
//!
//! The [`defer!`] macro runs a block at scope exit:
//!
//! ```
//! use std::cell::Cell;
//!
//! use exitguard::defer;
//!
//! let drops = Cell::new(0);
//! {
//!     defer! {
//!         drops.set(drops.get() + 1);
//!     }
//!     assert_eq!(drops.get(), 0);
//! }
//! assert_eq!(drops.get(), 1);
//! ```
//!
//! A named guard can protect a value and be released once the risky part is
//! over:
//!
//! ```
//! use exitguard::guard;
//!
//! fn apply(items: &mut Vec<i32>) {
//!     // roll back the push unless we reach the end of the function
//!     let mut restore = guard(items, |items| { items.pop(); });
//!     restore.push(1);
//!
//!     // ... fallible work with `restore` derefing to the vector ...
//!
//!     restore.release();
//! }
//!
//! let mut items = Vec::new();
//! apply(&mut items);
//! assert_eq!(items, vec![1]);
//! ```
//!
//! # Panics
//!
//! If the guard closure itself panics while it runs during an unwind, the
//! process aborts per Rust's double-panic rule. The guard does not try to
//! intercept or mask this; propagation is the only policy.
//!
//! # Crate features
//!
//! - `use_std` (default): enables the [`OnSuccess`] and [`OnUnwind`]
//!   strategies, which query `std::thread::panicking`. Without it the crate
//!   is `no_std` and only [`Always`] guards are available.

#![cfg_attr(not(any(test, feature = "use_std")), no_std)]

mod macros;
mod scope_guard;
mod strategy;

#[cfg(feature = "use_std")]
pub use crate::scope_guard::{guard_on_success, guard_on_unwind};
pub use crate::scope_guard::{guard, ScopeGuard};
#[cfg(feature = "use_std")]
pub use crate::strategy::{OnSuccess, OnUnwind};
pub use crate::strategy::{Always, Strategy};
