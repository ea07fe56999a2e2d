pub mod editor;
pub mod theme;

pub use editor::{EventResult, GridEditor};
