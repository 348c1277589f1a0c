use super::{Color, Edges, TextStyle};

/// A solid border line on one side of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderLine {
    pub width: u16,
    pub color: Color,
}

impl BorderLine {
    pub const fn solid(width: u16, color: Color) -> Self {
        Self { width, color }
    }

    /// CSS shorthand, e.g. `1px solid #cccccc`.
    pub fn to_css(&self) -> String {
        format!("{}px solid {}", self.width, self.color.to_css())
    }
}

pub type Borders = Edges<Option<BorderLine>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub border: Borders,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border_top(mut self, line: BorderLine) -> Self {
        self.border.top = Some(line);
        self
    }

    pub fn border_right(mut self, line: BorderLine) -> Self {
        self.border.right = Some(line);
        self
    }

    pub fn border_bottom(mut self, line: BorderLine) -> Self {
        self.border.bottom = Some(line);
        self
    }

    pub fn border_left(mut self, line: BorderLine) -> Self {
        self.border.left = Some(line);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }
}
