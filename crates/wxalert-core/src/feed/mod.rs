pub mod parse;
pub mod read;
