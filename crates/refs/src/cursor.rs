//! The caret abstraction shared by plain and rich text inputs.
//!
//! The autocomplete state machine only needs "the text around the caret
//! and the caret's offset in it". Plain inputs have exactly that; rich
//! inputs (a sequence of text and marker nodes) first resolve the caret
//! to the nearest text-bearing node.

/// A caret position resolvable to a text buffer and a byte offset.
pub trait TextCursor {
    /// Resolves to `(text, offset)`, or `None` when the caret does not
    /// sit in (or next to) a text node. Offsets are byte offsets and
    /// must fall on character boundaries.
    fn resolve(&self) -> Option<(&str, usize)>;
}

/// Clamps `offset` to the text length and walks it back to the nearest
/// character boundary. Caret offsets arriving from UTF-16 based editors
/// can land mid-codepoint; slicing there would panic.
fn snap_to_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Caret in a plain linear buffer: the whole text plus an offset.
#[derive(Debug, Clone, Copy)]
pub struct LinearCursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> LinearCursor<'a> {
    /// Creates a cursor; the offset is clamped to the text length and
    /// snapped back to a character boundary.
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self {
            text,
            offset: snap_to_char_boundary(text, offset),
        }
    }

    /// Cursor at the end of the text, the common case while typing.
    pub fn at_end(text: &'a str) -> Self {
        Self::new(text, text.len())
    }
}

impl TextCursor for LinearCursor<'_> {
    fn resolve(&self) -> Option<(&str, usize)> {
        Some((self.text, self.offset))
    }
}

/// One node of a rich text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextNode {
    /// Plain editable text.
    Text(String),
    /// An inline reference badge; atomic, the caret cannot enter it.
    Marker {
        /// Id of the referenced recipe.
        id: String,
        /// Display text of the badge, e.g. `@Tomato Soup`.
        text: String,
    },
}

/// A caret position within a rich buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RichCaret {
    /// Inside the text node at `node`, at byte `offset`.
    InText {
        /// Index into the node list.
        node: usize,
        /// Byte offset within that node's text.
        offset: usize,
    },
    /// Between children: before the node at `index` (or at the very end
    /// when `index` equals the node count).
    BetweenNodes {
        /// Child index the caret precedes.
        index: usize,
    },
}

/// Caret in a rich buffer: a node list plus a `RichCaret`.
#[derive(Debug, Clone, Copy)]
pub struct NodeCursor<'a> {
    nodes: &'a [TextNode],
    caret: RichCaret,
}

impl<'a> NodeCursor<'a> {
    /// Creates a cursor over `nodes`.
    pub fn new(nodes: &'a [TextNode], caret: RichCaret) -> Self {
        Self { nodes, caret }
    }

    /// The underlying node list.
    pub fn nodes(&self) -> &'a [TextNode] {
        self.nodes
    }

    /// Resolves the caret to a text node index and byte offset.
    ///
    /// A between-nodes caret snaps to the end of a preceding text node,
    /// or failing that to the start of the following one. Carets on a
    /// marker resolve to nothing.
    pub fn resolve_node(&self) -> Option<(usize, usize)> {
        match self.caret {
            RichCaret::InText { node, offset } => match self.nodes.get(node)? {
                TextNode::Text(text) => Some((node, snap_to_char_boundary(text, offset))),
                TextNode::Marker { .. } => None,
            },
            RichCaret::BetweenNodes { index } => {
                if index > 0 {
                    if let Some(TextNode::Text(text)) = self.nodes.get(index - 1) {
                        return Some((index - 1, text.len()));
                    }
                }
                match self.nodes.get(index) {
                    Some(TextNode::Text(_)) => Some((index, 0)),
                    _ => None,
                }
            }
        }
    }
}

impl TextCursor for NodeCursor<'_> {
    fn resolve(&self) -> Option<(&str, usize)> {
        let (node, offset) = self.resolve_node()?;
        match &self.nodes[node] {
            TextNode::Text(text) => Some((text.as_str(), offset)),
            TextNode::Marker { .. } => None,
        }
    }
}
