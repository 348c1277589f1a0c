mod color;
mod edges;
mod enums;
mod style;

pub use color::Color;
pub use edges::Edges;
pub use enums::{Direction, Justify, Size, TextAlign, TextStyle, TextWrap};
pub use style::{BorderLine, Borders, Style};
