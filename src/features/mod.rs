pub mod items;
pub mod videos;
