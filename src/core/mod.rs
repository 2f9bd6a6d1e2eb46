//! 核心几何类型（Position, Range）与字符分类

pub mod chars;
pub mod position;
pub mod range;

pub use position::{Position, PositionLike};
pub use range::{Range, RangeLike};
