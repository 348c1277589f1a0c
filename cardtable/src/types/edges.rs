/// Per-side values in top, right, bottom, left order.
///
/// Used with `u16` for padding and margin, and with `Option<BorderLine>`
/// for borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges<T = u16> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Edges<T> {
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Edges<u16> {
    pub const fn left(value: u16) -> Self {
        Self {
            top: 0,
            right: 0,
            bottom: 0,
            left: value,
        }
    }
}
