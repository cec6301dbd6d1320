mod colors;
mod footer;
mod header;
mod pages;
mod popup;
mod render;
mod sidebar;

pub use render::render;
