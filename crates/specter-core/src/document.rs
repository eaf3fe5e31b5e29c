//! The specification document served by the generator

/// A specification document and the server-side path it was loaded from.
///
/// The generator serves exactly one document per process. When it was
/// started without a backing file the path is `None` and saving is not
/// possible; the path never changes after load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecDocument {
    /// Raw document text, YAML-like shorthand the generator understands
    pub text: String,

    /// Server-side file path backing the document, if any
    pub path: Option<String>,
}

impl SpecDocument {
    pub fn new(text: impl Into<String>, path: Option<String>) -> Self {
        Self {
            text: text.into(),
            path,
        }
    }

    /// Whether the document is backed by a server-side file (saving possible)
    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }
}
