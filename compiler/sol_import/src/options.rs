//! Import configuration.

/// Where kind-specific scalar fields live in a document node.
///
/// Exporters have written scalar fields either inline on the node object or
/// grouped under an `attributes` object. Child nodes, `id` and `src` are
/// always found in either place.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum FieldLayout {
    /// Read both groupings. Nodes tagged through `name` prefer `attributes`
    /// and never read their inline `name` as a field; all others prefer the
    /// inline field.
    #[default]
    Auto,
    /// Scalars only from the node object itself.
    Inline,
    /// Scalars only from the `attributes` object.
    Nested,
}

/// Options for one import.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ImportOptions {
    pub layout: FieldLayout,
    /// Maximum node nesting, root included. `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Fail when two dispatched nodes carry the same id.
    pub reject_duplicate_ids: bool,
    /// End of the root's default range when the root has no `src`.
    pub root_length: Option<u32>,
}

impl ImportOptions {
    /// Default options with duplicate-id rejection.
    pub fn strict() -> Self {
        ImportOptions {
            reject_duplicate_ids: true,
            ..ImportOptions::default()
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: FieldLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_reject_duplicate_ids(mut self, reject: bool) -> Self {
        self.reject_duplicate_ids = reject;
        self
    }

    #[must_use]
    pub fn with_root_length(mut self, length: u32) -> Self {
        self.root_length = Some(length);
        self
    }
}
