//! Scope-bound resource management for lexical blocks.
//!
//! Clasp ties an *enter* action and an *exit* action to a lexical block so
//! the exit action runs deterministically when control leaves the block,
//! without the caller pairing acquisition and release by hand at every exit
//! path. Three surface forms share one underlying mechanism:
//!
//! - **Paired-action scope** ([`with_scope`], [`scoped!`]): run `enter`
//!   before the block, `exit` exactly once after it.
//! - **Exit-only scope** ([`on_scope_exit`], [`scope_exit!`]): the same with
//!   a no-op enter.
//! - **Bound-resource scope** ([`with_bound`], [`bound!`]): a declaration
//!   (typically `acquire()`) whose value lives exactly as long as the block,
//!   released by the exit action (typically `release(v)`).
//!
//! A fourth primitive, [`scope_break!`], ends a scope body early from inside
//! it while still guaranteeing the exit action fires.
//!
//! # Lifecycle
//!
//! Every scope run is an ephemeral, stack-local state machine:
//!
//! ```text
//! NotEntered ──enter()──▶ Entered ──▶ body runs at most once
//!                                       │
//!                        normal completion │ scope_break! / continue
//!                                       ▼
//!                                    Exited (terminal, exit action ran)
//! ```
//!
//! The "has the exit action run" bit is the `Option` slot inside
//! [`ExitGuard`]: `Some` until the guard drops, taken exactly once, never
//! re-armed. Nested scopes tear down in strict LIFO order because inner
//! guards are lexically contained in outer bodies.
//!
//! # Exit actions run on *every* exit path
//!
//! Exit actions ride on `Drop`, so they run on normal fall-through, on
//! [`scope_break!`], on early `return`/`?` out of the enclosing function,
//! and during panic unwinding. Languages without destructors cannot honor
//! the exit action across a non-local function exit; here the guarantee
//! deliberately covers every path, and callers may rely on it.
//!
//! One exception, chosen deliberately: if the *enter* action panics, the
//! scope was never entered and the exit action does **not** run. Enter must
//! complete before the scope exists.
//!
//! # Quick start
//!
//! ```rust
//! use clasp::{bound, scoped};
//! use std::cell::RefCell;
//!
//! let log = RefCell::new(Vec::new());
//!
//! // Paired actions around a block, e.g. masking interrupts on a target.
//! scoped!(log.borrow_mut().push("irq off"), log.borrow_mut().push("irq on"), {
//!     log.borrow_mut().push("critical section");
//! });
//! assert_eq!(*log.borrow(), ["irq off", "critical section", "irq on"]);
//!
//! // A resource bound to a block, released when the block ends.
//! let released = RefCell::new(None);
//! bound!(let buf = vec![0u8; 16] => released.replace(Some(buf)); {
//!     buf[0] = 42;
//! });
//! assert_eq!(released.borrow().as_ref().unwrap()[0], 42);
//! ```
//!
//! # Concurrency
//!
//! The construct is single-threaded and synchronous: enter, body, and exit
//! run sequentially on the calling thread with no suspension points. It
//! provides ordering (enter before body before exit, exactly once) but no
//! locking; serializing whatever the actions touch is the caller's job.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bound;
pub mod guard;
mod macros;
pub mod scope;

// Public re-exports for the primary API surface.
pub use bound::{bind, BoundGuard};
pub use guard::{on_exit, ExitGuard};
pub use scope::{on_scope_exit, with_bound, with_scope};
