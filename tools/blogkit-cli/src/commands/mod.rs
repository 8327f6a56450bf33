pub mod config;
pub mod embed;
pub mod post;
pub mod render;
