//! Read-only view over one document node.
//!
//! A document node is a JSON object carrying a kind tag, an `id`, a `src`
//! range marker and kind-specific fields. Fields may sit on the object
//! itself or under its `attributes` object; `DocNode` hides which.
//! Null-valued fields read as absent.

use serde_json::{Map, Value};
use sol_ir::NodeKind;

use crate::error::{ImportError, NodeContext, SchemaReason};
use crate::options::FieldLayout;

type Object = Map<String, Value>;

/// Keys that may carry the kind tag, in lookup order.
const KIND_KEYS: [KindKey; 3] = [KindKey::NodeType, KindKey::Name, KindKey::Kind];

/// The key a node's kind tag was read from.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) enum KindKey {
    NodeType,
    Name,
    Kind,
}

impl KindKey {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            KindKey::NodeType => "nodeType",
            KindKey::Name => "name",
            KindKey::Kind => "kind",
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct DocNode<'a> {
    object: &'a Object,
    attributes: Option<&'a Object>,
    kind: NodeKind,
    kind_key: KindKey,
    layout: FieldLayout,
}

impl<'a> DocNode<'a> {
    /// Wrap `value`, resolving its kind tag.
    ///
    /// A string `nodeType` is authoritative. Without one, `name` and then
    /// `kind` are tried and the first supported tag wins.
    pub(crate) fn new(value: &'a Value, layout: FieldLayout) -> Result<Self, ImportError> {
        let Some(object) = value.as_object() else {
            return Err(ImportError::schema(
                NodeContext::default(),
                SchemaReason::NotAnObject,
            ));
        };
        let (kind, kind_key) = resolve_kind(object)?;
        let attributes = object.get("attributes").and_then(Value::as_object);
        Ok(DocNode {
            object,
            attributes,
            kind,
            kind_key,
            layout,
        })
    }

    #[inline]
    pub(crate) fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The document `id`, if present and integral.
    pub(crate) fn raw_id(&self) -> Option<i64> {
        self.structural("id").and_then(Value::as_i64)
    }

    pub(crate) fn context(&self) -> NodeContext {
        NodeContext::new(self.kind, self.raw_id())
    }

    /// The required `id`.
    pub(crate) fn id(&self) -> Result<i64, ImportError> {
        match self.structural("id") {
            None => Err(ImportError::missing(self.context(), "id")),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| ImportError::wrong_type(self.context(), "id", "an integer")),
        }
    }

    /// The `src` range marker, if present.
    pub(crate) fn src(&self) -> Result<Option<&'a str>, ImportError> {
        match self.structural("src") {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| ImportError::wrong_type(self.context(), "src", "a string")),
        }
    }

    /// A field that holds a child node or a list: inline first, then
    /// `attributes`, regardless of layout.
    pub(crate) fn structural(&self, key: &str) -> Option<&'a Value> {
        non_null(self.object.get(key)).or_else(|| self.nested(key))
    }

    /// A scalar field, looked up according to the layout.
    pub(crate) fn scalar(&self, key: &str) -> Option<&'a Value> {
        match self.layout {
            FieldLayout::Inline => self.inline(key),
            FieldLayout::Nested => self.nested(key),
            FieldLayout::Auto if self.kind_key == KindKey::Name => {
                self.nested(key).or_else(|| self.inline(key))
            }
            FieldLayout::Auto => self.inline(key).or_else(|| self.nested(key)),
        }
    }

    fn inline(&self, key: &str) -> Option<&'a Value> {
        if key == self.kind_key.as_str() {
            return None;
        }
        non_null(self.object.get(key))
    }

    fn nested(&self, key: &str) -> Option<&'a Value> {
        non_null(self.attributes.and_then(|attrs| attrs.get(key)))
    }

    pub(crate) fn opt_str(&self, key: &'static str) -> Result<Option<&'a str>, ImportError> {
        match self.scalar(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| ImportError::wrong_type(self.context(), key, "a string")),
        }
    }

    pub(crate) fn str(&self, key: &'static str) -> Result<&'a str, ImportError> {
        self.opt_str(key)?
            .ok_or_else(|| ImportError::missing(self.context(), key))
    }

    pub(crate) fn opt_bool(&self, key: &'static str) -> Result<Option<bool>, ImportError> {
        match self.scalar(key) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| ImportError::wrong_type(self.context(), key, "a boolean")),
        }
    }

    pub(crate) fn bool(&self, key: &'static str) -> Result<bool, ImportError> {
        self.opt_bool(key)?
            .ok_or_else(|| ImportError::missing(self.context(), key))
    }

    /// A boolean that reads as `false` when absent.
    pub(crate) fn flag(&self, key: &'static str) -> Result<bool, ImportError> {
        Ok(self.opt_bool(key)?.unwrap_or(false))
    }

    /// A list field; absent reads as empty.
    pub(crate) fn list(&self, key: &'static str) -> Result<&'a [Value], ImportError> {
        match self.structural(key) {
            None => Ok(&[]),
            Some(value) => value
                .as_array()
                .map(Vec::as_slice)
                .ok_or_else(|| ImportError::wrong_type(self.context(), key, "an array")),
        }
    }

    /// A list of strings; absent reads as empty.
    pub(crate) fn strings(&self, key: &'static str) -> Result<Vec<String>, ImportError> {
        self.list(key)?
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| ImportError::wrong_type(self.context(), key, "a list of strings"))
            })
            .collect()
    }
}

#[inline]
fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn resolve_kind(object: &Object) -> Result<(NodeKind, KindKey), ImportError> {
    let tag = |key: KindKey| object.get(key.as_str()).and_then(Value::as_str);

    if let Some(text) = tag(KindKey::NodeType) {
        return NodeKind::from_tag(text)
            .map(|kind| (kind, KindKey::NodeType))
            .ok_or_else(|| ImportError::UnknownKind {
                kind: text.to_owned(),
            });
    }

    let mut first_seen = None;
    for key in KIND_KEYS {
        let Some(text) = tag(key) else { continue };
        if let Some(kind) = NodeKind::from_tag(text) {
            return Ok((kind, key));
        }
        first_seen.get_or_insert(text);
    }

    match first_seen {
        Some(text) => Err(ImportError::UnknownKind {
            kind: text.to_owned(),
        }),
        None => Err(ImportError::schema(
            NodeContext {
                kind: None,
                id: object.get("id").and_then(Value::as_i64),
            },
            SchemaReason::MissingField { field: "nodeType" },
        )),
    }
}
