//! FileKind enum for handler dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// File type recognized by a handler in the chain.
///
/// Each variant maps to exactly one file extension, so the default chain
/// has disjoint recognition sets and chain order only matters when a
/// caller deliberately registers duplicate handlers.
///
/// The enum intentionally derives [`Hash`], [`Eq`], and [`Copy`] so that it
/// can be used as a key in [`HashMap`](std::collections::HashMap)-backed
/// lookups without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// `*.xml` files
    Xml,
    /// `*.json` files
    Json,
    /// `*.csv` files
    Csv,
    /// `*.txt` files
    Txt,
}

impl FileKind {
    /// All kinds, in the canonical chain order (`xml -> json -> csv -> txt`).
    pub const ALL: [FileKind; 4] = [FileKind::Xml, FileKind::Json, FileKind::Csv, FileKind::Txt];

    /// The lowercased extension this kind recognizes.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Xml => "xml",
            FileKind::Json => "json",
            FileKind::Csv => "csv",
            FileKind::Txt => "txt",
        }
    }

    /// Decorated tag used in notification output (`<XML>`, `{JSON}`, ...).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            FileKind::Xml => "<XML>",
            FileKind::Json => "{JSON}",
            FileKind::Csv => "[CSV]",
            FileKind::Txt => "*TXT*",
        }
    }

    /// Look up the kind recognizing `ext`, case-insensitively.
    ///
    /// Returns `None` for extensions outside the four recognized kinds,
    /// including the empty string.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<FileKind> {
        FileKind::ALL
            .into_iter()
            .find(|kind| kind.extension().eq_ignore_ascii_case(ext))
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileKind::Xml => "XML",
            FileKind::Json => "JSON",
            FileKind::Csv => "CSV",
            FileKind::Txt => "TXT",
        })
    }
}
