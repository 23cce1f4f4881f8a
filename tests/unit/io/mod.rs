mod error;
mod parse;
