pub mod cli;
pub mod commands;
pub mod flood_fill;
pub mod iconset;
pub mod strip;
