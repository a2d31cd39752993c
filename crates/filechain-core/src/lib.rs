//! # filechain-core
//!
//! Chain-of-responsibility dispatch engine for file-type recognition.
//!
//! A [`HandlerChain`] is a singly-linked sequence of handlers, each
//! recognizing one file extension. A dispatched path walks the chain until
//! some handler claims it or the chain is exhausted:
//!
//! - [`FileKind`] -- the recognized file types (XML, JSON, CSV, TXT)
//! - [`FileHandler`] -- trait for a single link in the chain
//! - [`ExtensionHandler`] -- built-in per-extension handler
//! - [`ChainBuilder`] / [`HandlerChain`] -- one-time wiring and dispatch
//! - [`dispatch_all`] -- the synchronous dispatch loop
//!
//! Recognition is a pure, case-insensitive comparison on the path's
//! extension. No file content is read and no filesystem access occurs;
//! "no handler matched" is a normal outcome, not an error.

pub mod chain;
pub mod dispatch;
pub mod ext;
pub mod kind;

pub use chain::{ChainBuilder, ExtensionHandler, FileHandler, HandlerChain, Outcome};
pub use dispatch::{DispatchRecord, DispatchReport, DispatchSummary, dispatch_all};
pub use ext::extension_of;
pub use kind::FileKind;
