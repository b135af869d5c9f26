pub mod admin;
pub mod parse;
pub mod validate;
