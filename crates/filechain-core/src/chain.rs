//! Extensible file dispatch via the chain-of-responsibility pattern.
//!
//! Handlers form a singly-linked, acyclic chain: each handler exclusively
//! owns its successor, and the last handler's successor is absent. A
//! dispatched path is claimed by the first handler whose extension matches
//! and forwarded unchanged otherwise. Third-party code can implement
//! [`FileHandler`] and wire it into a [`ChainBuilder`] to extend or
//! override the built-in recognition without modifying filechain-core.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ext::extension_of;
use crate::kind::FileKind;

/// Terminal state of one dispatch.
///
/// Propagation stops as soon as a handler claims the path; a path that
/// walks past the last handler is `Unrecognized`, which is a normal
/// outcome rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Some handler claimed the path as this kind.
    Recognized(FileKind),
    /// No handler in the chain claimed the path.
    Unrecognized,
}

impl Outcome {
    /// Returns `true` if some handler claimed the path.
    #[must_use]
    pub fn is_recognized(self) -> bool {
        matches!(self, Outcome::Recognized(_))
    }

    /// The claimed kind, if any.
    #[must_use]
    pub fn kind(self) -> Option<FileKind> {
        match self {
            Outcome::Recognized(kind) => Some(kind),
            Outcome::Unrecognized => None,
        }
    }
}

/// A single link in the handler chain.
///
/// Implementors either claim a path (stopping propagation) or forward it
/// unchanged to their successor. [`set_next`](FileHandler::set_next) is the
/// one-time wiring hook called by [`ChainBuilder::build`]; handlers are
/// immutable for the remainder of execution.
///
/// # Object Safety
///
/// This trait is object-safe so that handlers can be stored as
/// `Box<dyn FileHandler>` links.
pub trait FileHandler: Send + Sync {
    /// Walk the chain starting at this handler and return the terminal
    /// state for `path`. Infallible and deterministic.
    fn handle(&self, path: &Path) -> Outcome;

    /// Attach the successor. Called exactly once per handler during wiring.
    fn set_next(&mut self, next: Box<dyn FileHandler>);

    /// Human-readable name for this handler (used in logging).
    ///
    /// Defaults to the short (unqualified) type name.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// Built-in handler recognizing a single [`FileKind`] by extension.
///
/// The match is a pure, case-insensitive string comparison on the path's
/// extension; no file content is inspected.
pub struct ExtensionHandler {
    kind: FileKind,
    next: Option<Box<dyn FileHandler>>,
}

impl ExtensionHandler {
    /// Create an unlinked handler for `kind`.
    pub fn new(kind: FileKind) -> Self {
        Self { kind, next: None }
    }

    /// The kind this handler recognizes.
    #[must_use]
    pub fn kind(&self) -> FileKind {
        self.kind
    }
}

impl FileHandler for ExtensionHandler {
    fn handle(&self, path: &Path) -> Outcome {
        if extension_of(path) == self.kind.extension() {
            return Outcome::Recognized(self.kind);
        }
        match &self.next {
            Some(next) => next.handle(path),
            None => Outcome::Unrecognized,
        }
    }

    fn set_next(&mut self, next: Box<dyn FileHandler>) {
        self.next = Some(next);
    }

    fn name(&self) -> &str {
        "ExtensionHandler"
    }
}

/// One-time wiring of an ordered list of handlers into a [`HandlerChain`].
///
/// Handlers are linked back-to-front so that `handler[i]` forwards to
/// `handler[i + 1]` and the last handler has no successor. Duplicate
/// extensions are permitted; the earlier handler wins.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use filechain_core::{ChainBuilder, ExtensionHandler, FileKind, Outcome};
///
/// let chain = ChainBuilder::new()
///     .push(ExtensionHandler::new(FileKind::Xml))
///     .push(ExtensionHandler::new(FileKind::Json))
///     .build();
///
/// assert_eq!(
///     chain.dispatch(Path::new("aaa.xml")),
///     Outcome::Recognized(FileKind::Xml)
/// );
/// assert_eq!(chain.dispatch(Path::new("zzz.txt")), Outcome::Unrecognized);
/// ```
#[derive(Default)]
pub struct ChainBuilder {
    handlers: Vec<Box<dyn FileHandler>>,
}

impl ChainBuilder {
    /// Create a builder with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler to the end of the chain (lowest priority).
    ///
    /// Consumes and returns `self` for builder-style chaining.
    pub fn push(mut self, handler: impl FileHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Link the accumulated handlers and return the finished chain.
    pub fn build(self) -> HandlerChain {
        let len = self.handlers.len();
        let mut head: Option<Box<dyn FileHandler>> = None;
        for mut handler in self.handlers.into_iter().rev() {
            if let Some(next) = head.take() {
                handler.set_next(next);
            }
            head = Some(handler);
        }
        HandlerChain { head, len }
    }
}

/// An immutable, fully wired handler chain.
///
/// Built once via [`ChainBuilder`] (or [`with_defaults`](Self::with_defaults)
/// for the canonical `xml -> json -> csv -> txt` chain) and read-only
/// afterwards, so dispatch requires no locking.
pub struct HandlerChain {
    head: Option<Box<dyn FileHandler>>,
    len: usize,
}

impl HandlerChain {
    /// Start building a custom chain.
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// The canonical chain: one [`ExtensionHandler`] per [`FileKind`], in
    /// [`FileKind::ALL`] order.
    pub fn with_defaults() -> Self {
        FileKind::ALL
            .into_iter()
            .fold(ChainBuilder::new(), |builder, kind| {
                builder.push(ExtensionHandler::new(kind))
            })
            .build()
    }

    /// Submit `path` to the head of the chain and walk it to a terminal
    /// state. An empty chain recognizes nothing.
    #[must_use]
    pub fn dispatch(&self, path: &Path) -> Outcome {
        match &self.head {
            Some(head) => head.handle(path),
            None => Outcome::Unrecognized,
        }
    }

    /// Number of handlers in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain contains no handlers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    // ---- ExtensionHandler ----

    #[test]
    fn unlinked_handler_claims_own_extension() {
        let handler = ExtensionHandler::new(FileKind::Xml);
        assert_eq!(
            handler.handle(Path::new("aaa.xml")),
            Outcome::Recognized(FileKind::Xml)
        );
    }

    #[test]
    fn unlinked_handler_reports_unrecognized_for_mismatch() {
        let handler = ExtensionHandler::new(FileKind::Xml);
        assert_eq!(handler.handle(Path::new("xxx.json")), Outcome::Unrecognized);
    }

    #[test]
    fn handler_match_is_case_insensitive() {
        let handler = ExtensionHandler::new(FileKind::Txt);
        assert_eq!(
            handler.handle(Path::new("ZZZ.TXT")),
            Outcome::Recognized(FileKind::Txt)
        );
    }

    #[test]
    fn handler_name() {
        assert_eq!(ExtensionHandler::new(FileKind::Csv).name(), "ExtensionHandler");
    }

    // ---- HandlerChain ----

    #[test]
    fn empty_chain_recognizes_nothing() {
        let chain = ChainBuilder::new().build();
        assert!(chain.is_empty());
        assert_eq!(chain.dispatch(Path::new("aaa.xml")), Outcome::Unrecognized);
    }

    #[test]
    fn with_defaults_has_four_handlers() {
        let chain = HandlerChain::with_defaults();
        assert_eq!(chain.len(), 4);
        assert!(!chain.is_empty());
    }

    #[test]
    fn default_chain_claims_each_kind() {
        let chain = HandlerChain::with_defaults();
        assert_eq!(
            chain.dispatch(Path::new("aaa.xml")),
            Outcome::Recognized(FileKind::Xml)
        );
        assert_eq!(
            chain.dispatch(Path::new("xxx.json")),
            Outcome::Recognized(FileKind::Json)
        );
        assert_eq!(
            chain.dispatch(Path::new("yyy.csv")),
            Outcome::Recognized(FileKind::Csv)
        );
        assert_eq!(
            chain.dispatch(Path::new("zzz.txt")),
            Outcome::Recognized(FileKind::Txt)
        );
    }

    #[test]
    fn default_chain_skips_unknown_extension() {
        let chain = HandlerChain::with_defaults();
        assert_eq!(chain.dispatch(Path::new("yyy.svc")), Outcome::Unrecognized);
        assert_eq!(chain.dispatch(Path::new("bbb.log")), Outcome::Unrecognized);
    }

    #[test]
    fn default_chain_skips_path_without_extension() {
        let chain = HandlerChain::with_defaults();
        assert_eq!(chain.dispatch(Path::new("ddd")), Outcome::Unrecognized);
    }

    #[test]
    fn dispatch_is_idempotent() {
        let chain = HandlerChain::with_defaults();
        let first = chain.dispatch(Path::new("ccc.json"));
        let second = chain.dispatch(Path::new("ccc.json"));
        assert_eq!(first, second);
        assert_eq!(first, Outcome::Recognized(FileKind::Json));
    }

    // ---- Chain order precedence ----

    /// Handler that counts how often it fires, for asserting which link
    /// in the chain claimed a path.
    struct CountingHandler {
        kind: FileKind,
        hits: Arc<AtomicUsize>,
        next: Option<Box<dyn FileHandler>>,
    }

    impl CountingHandler {
        fn new(kind: FileKind, hits: Arc<AtomicUsize>) -> Self {
            Self {
                kind,
                hits,
                next: None,
            }
        }
    }

    impl FileHandler for CountingHandler {
        fn handle(&self, path: &Path) -> Outcome {
            if extension_of(path) == self.kind.extension() {
                self.hits.fetch_add(1, Ordering::SeqCst);
                return Outcome::Recognized(self.kind);
            }
            match &self.next {
                Some(next) => next.handle(path),
                None => Outcome::Unrecognized,
            }
        }

        fn set_next(&mut self, next: Box<dyn FileHandler>) {
            self.next = Some(next);
        }
    }

    #[test]
    fn earlier_duplicate_handler_wins() {
        let first_hits = Arc::new(AtomicUsize::new(0));
        let second_hits = Arc::new(AtomicUsize::new(0));

        let chain = ChainBuilder::new()
            .push(CountingHandler::new(FileKind::Txt, Arc::clone(&first_hits)))
            .push(CountingHandler::new(FileKind::Txt, Arc::clone(&second_hits)))
            .build();

        assert_eq!(
            chain.dispatch(Path::new("zzz.txt")),
            Outcome::Recognized(FileKind::Txt)
        );
        assert_eq!(first_hits.load(Ordering::SeqCst), 1);
        assert_eq!(second_hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn exactly_one_handler_fires_per_recognized_path() {
        let hits: Vec<Arc<AtomicUsize>> =
            (0..4).map(|_| Arc::new(AtomicUsize::new(0))).collect();

        let chain = FileKind::ALL
            .into_iter()
            .zip(hits.iter())
            .fold(ChainBuilder::new(), |builder, (kind, counter)| {
                builder.push(CountingHandler::new(kind, Arc::clone(counter)))
            })
            .build();

        chain.dispatch(Path::new("yyy.csv"));

        let fired: Vec<usize> = hits.iter().map(|h| h.load(Ordering::SeqCst)).collect();
        assert_eq!(fired, vec![0, 0, 1, 0]);
    }

    #[test]
    fn mismatch_forwards_to_custom_successor() {
        let hits = Arc::new(AtomicUsize::new(0));
        let chain = ChainBuilder::new()
            .push(ExtensionHandler::new(FileKind::Xml))
            .push(CountingHandler::new(FileKind::Csv, Arc::clone(&hits)))
            .build();

        assert_eq!(
            chain.dispatch(Path::new("data.csv")),
            Outcome::Recognized(FileKind::Csv)
        );
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    // ---- Outcome ----

    #[test]
    fn outcome_accessors() {
        assert!(Outcome::Recognized(FileKind::Csv).is_recognized());
        assert!(!Outcome::Unrecognized.is_recognized());
        assert_eq!(
            Outcome::Recognized(FileKind::Csv).kind(),
            Some(FileKind::Csv)
        );
        assert_eq!(Outcome::Unrecognized.kind(), None);
    }

    #[test]
    fn outcome_serde_shape() {
        assert_eq!(
            serde_json::to_string(&Outcome::Recognized(FileKind::Xml)).unwrap(),
            "{\"recognized\":\"xml\"}"
        );
        assert_eq!(
            serde_json::to_string(&Outcome::Unrecognized).unwrap(),
            "\"unrecognized\""
        );
    }

    // ---- Send + Sync bounds ----

    #[test]
    fn chain_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HandlerChain>();
        assert_send_sync::<ExtensionHandler>();
    }
}
