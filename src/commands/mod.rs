pub mod all;
pub mod fix;
pub mod generate;
