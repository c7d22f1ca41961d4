//! Input data: typed cells and the CSV comment loader

mod cell;
mod loader;

pub use cell::{Cell, ColumnKind};
pub use loader::{CommentColumn, CommentLoader};
