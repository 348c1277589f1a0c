#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}
