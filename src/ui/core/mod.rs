pub mod color_support;
pub mod geom;
pub mod id;
pub mod painter;
pub mod style;
pub mod theme;
pub mod theme_adapter;
pub mod tree;
pub mod widget;
