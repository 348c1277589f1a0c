use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Direction, Edges, Justify, Size, Style, TextAlign, TextWrap};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node of the render tree handed to the host.
///
/// The tree only describes structure, sizing, ordering and decoration;
/// turning it into real UI nodes is up to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Box model
    pub height: Size,
    pub min_width: Option<u16>,
    pub padding: Edges,
    pub margin: Edges,

    // Flex container
    pub direction: Direction,
    pub justify: Justify,

    // Flex item
    pub flex_grow: u16,
    pub flex_shrink: u16,
    pub flex_basis: Size,

    // Visual
    pub style: Style,

    // Text-specific
    pub text_wrap: TextWrap,
    pub text_align: TextAlign,

    /// Host attributes such as `role`, `scope` or `aria-hidden`.
    pub attributes: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            height: Size::Auto,
            min_width: None,
            padding: Edges::default(),
            margin: Edges::default(),
            direction: Direction::Column,
            justify: Justify::Start,
            flex_grow: 0,
            flex_shrink: 1,
            flex_basis: Size::Auto,
            style: Style::default(),
            text_wrap: TextWrap::NoWrap,
            text_align: TextAlign::Left,
            attributes: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Box model
    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    // Flex container
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    // Flex item
    /// Set grow, shrink and basis together, like the CSS `flex` shorthand.
    pub fn flex(mut self, grow: u16, shrink: u16, basis: Size) -> Self {
        self.flex_grow = grow;
        self.flex_shrink = shrink;
        self.flex_basis = basis;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Text
    pub fn text_wrap(mut self, text_wrap: TextWrap) -> Self {
        self.text_wrap = text_wrap;
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    // Children
    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append a child in place; used while a container is being assembled.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    pub fn child_count(&self) -> usize {
        self.content.children().len()
    }
}
