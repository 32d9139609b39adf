//! # Block Types
//!
//! A document is built from two kinds of block:
//!
//! - **Leaf** blocks carry content (text, image, button, ...)
//! - **Layout** blocks carry a fixed number of columns, each an ordered list
//!   of leaf blocks
//!
//! Columns are typed as `Vec<Vec<LeafBlock>>`, so a layout can never be
//! nested inside another layout.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::defaults;
use crate::wire::RawBlock;

/// Ordered CSS property → value mapping. Insertion order is the render order.
pub type Styles = IndexMap<String, String>;

/// Leaf block kinds.
///
/// Kinds read from JSON that are not recognized are kept verbatim in
/// [`BlockKind::Other`] so they survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Image,
    Button,
    Divider,
    Header,
    Footer,
    Table,
    Spacer,
    Social,
    Html,
    Video,
    Testimonial,
    Rating,
    Countdown,
    Map,
    Notification,
    Pricing,
    Other(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseKindError {
    #[error("\"layout\" is not a leaf block kind")]
    Layout,

    #[error("block kind must not be empty")]
    Empty,
}

impl BlockKind {
    /// Every built-in leaf kind, in palette order.
    pub const ALL: [BlockKind; 17] = [
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Button,
        BlockKind::Divider,
        BlockKind::Header,
        BlockKind::Footer,
        BlockKind::Table,
        BlockKind::Spacer,
        BlockKind::Social,
        BlockKind::Html,
        BlockKind::Video,
        BlockKind::Testimonial,
        BlockKind::Rating,
        BlockKind::Countdown,
        BlockKind::Map,
        BlockKind::Notification,
        BlockKind::Pricing,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Divider => "divider",
            BlockKind::Header => "header",
            BlockKind::Footer => "footer",
            BlockKind::Table => "table",
            BlockKind::Spacer => "spacer",
            BlockKind::Social => "social",
            BlockKind::Html => "html",
            BlockKind::Video => "video",
            BlockKind::Testimonial => "testimonial",
            BlockKind::Rating => "rating",
            BlockKind::Countdown => "countdown",
            BlockKind::Map => "map",
            BlockKind::Notification => "notification",
            BlockKind::Pricing => "pricing",
            BlockKind::Other(name) => name,
        }
    }

    /// True for every kind except [`BlockKind::Other`].
    pub fn is_builtin(&self) -> bool {
        !matches!(self, BlockKind::Other(_))
    }
}

impl FromStr for BlockKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseKindError::Empty);
        }
        if s == "layout" {
            return Err(ParseKindError::Layout);
        }

        let kind = BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .unwrap_or_else(|| BlockKind::Other(s.to_string()));
        Ok(kind)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BlockKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Column arrangement of a layout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    OneColumn,
    TwoColumn,
    ThreeColumn,
    FourColumn,
    TwoColumnAside,
    SidebarRight,
}

impl LayoutType {
    pub const ALL: [LayoutType; 6] = [
        LayoutType::OneColumn,
        LayoutType::TwoColumn,
        LayoutType::ThreeColumn,
        LayoutType::FourColumn,
        LayoutType::TwoColumnAside,
        LayoutType::SidebarRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::OneColumn => "one-column",
            LayoutType::TwoColumn => "two-column",
            LayoutType::ThreeColumn => "three-column",
            LayoutType::FourColumn => "four-column",
            LayoutType::TwoColumnAside => "two-column-aside",
            LayoutType::SidebarRight => "sidebar-right",
        }
    }

    /// Column widths in percent, one per slot.
    pub fn column_widths(&self) -> &'static [&'static str] {
        match self {
            LayoutType::OneColumn => &["100"],
            LayoutType::TwoColumn => &["50", "50"],
            LayoutType::ThreeColumn => &["33.33", "33.33", "33.33"],
            LayoutType::FourColumn => &["25", "25", "25", "25"],
            LayoutType::TwoColumnAside => &["33.33", "66.66"],
            LayoutType::SidebarRight => &["66.66", "33.33"],
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_widths().len()
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-breakpoint style overrides. Advisory metadata for the host; the
/// compiler only renders it when asked to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Styles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<Styles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<Styles>,
}

impl Responsive {
    pub fn is_empty(&self) -> bool {
        [&self.mobile, &self.tablet, &self.desktop]
            .into_iter()
            .all(|styles| styles.as_ref().map_or(true, IndexMap::is_empty))
    }
}

/// A content unit with no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafBlock {
    pub id: String,
    pub kind: BlockKind,
    /// Trusted markup, an image URL or a button label depending on `kind`.
    pub content: String,
    pub styles: Styles,
    pub link: Option<String>,
    pub alt_text: Option<String>,
    pub responsive: Option<Responsive>,
}

impl LeafBlock {
    /// Create a leaf with the creation defaults for `kind`.
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            content: defaults::default_content(&kind).to_string(),
            styles: defaults::default_styles(&kind),
            link: defaults::default_link(&kind).map(str::to_string),
            alt_text: defaults::default_alt_text(&kind).map(str::to_string),
            responsive: None,
            kind,
        }
    }

    /// Button target, `#` when absent.
    pub fn link_or_default(&self) -> &str {
        self.link.as_deref().unwrap_or("#")
    }

    /// Image alt text, `Image` when absent.
    pub fn alt_text_or_default(&self) -> &str {
        self.alt_text.as_deref().unwrap_or("Image")
    }

    /// The `textAlign` layout hint, `center` when absent.
    pub fn text_align(&self) -> &str {
        self.styles
            .get("textAlign")
            .map(String::as_str)
            .unwrap_or("center")
    }
}

/// A container with a fixed number of column slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutBlock {
    pub id: String,
    pub layout_type: LayoutType,
    pub columns: Vec<Vec<LeafBlock>>,
    pub styles: Styles,
}

impl LayoutBlock {
    /// Upper bound on the number of columns edits may grow a layout to.
    pub const MAX_COLUMNS: usize = 24;

    /// Create a layout with one empty column per slot.
    pub fn new(id: impl Into<String>, layout_type: LayoutType) -> Self {
        Self {
            id: id.into(),
            layout_type,
            columns: vec![Vec::new(); layout_type.column_count()],
            styles: Styles::new(),
        }
    }

    pub fn column(&self, index: usize) -> Option<&[LeafBlock]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Mutable column access, creating empty columns up to `index` if needed.
    /// Returns `None` for indices at or past [`LayoutBlock::MAX_COLUMNS`]
    /// that do not already exist.
    pub fn column_mut_or_grow(&mut self, index: usize) -> Option<&mut Vec<LeafBlock>> {
        if index >= self.columns.len() {
            if index >= Self::MAX_COLUMNS {
                return None;
            }
            self.columns.resize_with(index + 1, Vec::new);
        }
        self.columns.get_mut(index)
    }

    /// All leaves, column by column.
    pub fn leaves(&self) -> impl Iterator<Item = &LeafBlock> {
        self.columns.iter().flatten()
    }
}

/// A top-level document entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock", into = "RawBlock")]
pub enum Block {
    Leaf(LeafBlock),
    Layout(LayoutBlock),
}

impl Block {
    pub fn id(&self) -> &str {
        match self {
            Block::Leaf(leaf) => &leaf.id,
            Block::Layout(layout) => &layout.id,
        }
    }

    /// The JSON `kind` tag: a leaf kind name or `layout`.
    pub fn kind_name(&self) -> &str {
        match self {
            Block::Leaf(leaf) => leaf.kind.as_str(),
            Block::Layout(_) => "layout",
        }
    }

    pub fn styles(&self) -> &Styles {
        match self {
            Block::Leaf(leaf) => &leaf.styles,
            Block::Layout(layout) => &layout.styles,
        }
    }

    pub fn styles_mut(&mut self) -> &mut Styles {
        match self {
            Block::Leaf(leaf) => &mut leaf.styles,
            Block::Layout(layout) => &mut layout.styles,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafBlock> {
        match self {
            Block::Leaf(leaf) => Some(leaf),
            Block::Layout(_) => None,
        }
    }

    pub fn as_layout(&self) -> Option<&LayoutBlock> {
        match self {
            Block::Layout(layout) => Some(layout),
            Block::Leaf(_) => None,
        }
    }

    pub fn as_layout_mut(&mut self) -> Option<&mut LayoutBlock> {
        match self {
            Block::Layout(layout) => Some(layout),
            Block::Leaf(_) => None,
        }
    }

    /// Ids of this block and, for layouts, every nested leaf.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Block::Leaf(leaf) => vec![leaf.id.as_str()],
            Block::Layout(layout) => std::iter::once(layout.id.as_str())
                .chain(layout.leaves().map(|leaf| leaf.id.as_str()))
                .collect(),
        }
    }
}

impl From<LeafBlock> for Block {
    fn from(leaf: LeafBlock) -> Self {
        Block::Leaf(leaf)
    }
}

impl From<LayoutBlock> for Block {
    fn from(layout: LayoutBlock) -> Self {
        Block::Layout(layout)
    }
}

/// What a palette entry creates: a leaf of some kind or a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockTemplate {
    Leaf(BlockKind),
    Layout(LayoutType),
}

impl From<BlockKind> for BlockTemplate {
    fn from(kind: BlockKind) -> Self {
        BlockTemplate::Leaf(kind)
    }
}

impl From<LayoutType> for BlockTemplate {
    fn from(layout_type: LayoutType) -> Self {
        BlockTemplate::Layout(layout_type)
    }
}

/// Shallow field update. Each field that is set replaces the block's field
/// wholesale; `styles` replaces the whole mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Styles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<Responsive>,
}

impl BlockPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn styles(styles: Styles) -> Self {
        Self {
            styles: Some(styles),
            ..Default::default()
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn with_responsive(mut self, responsive: Responsive) -> Self {
        self.responsive = Some(responsive);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to_leaf(&self, leaf: &mut LeafBlock) {
        if let Some(content) = &self.content {
            leaf.content = content.clone();
        }
        if let Some(styles) = &self.styles {
            leaf.styles = styles.clone();
        }
        if let Some(link) = &self.link {
            leaf.link = Some(link.clone());
        }
        if let Some(alt_text) = &self.alt_text {
            leaf.alt_text = Some(alt_text.clone());
        }
        if let Some(responsive) = &self.responsive {
            leaf.responsive = Some(responsive.clone());
        }
    }

    /// Layouts only take `styles`; other fields are ignored.
    pub fn apply_to(&self, block: &mut Block) {
        match block {
            Block::Leaf(leaf) => self.apply_to_leaf(leaf),
            Block::Layout(layout) => {
                if let Some(styles) = &self.styles {
                    layout.styles = styles.clone();
                }
            }
        }
    }
}
