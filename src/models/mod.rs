mod token;

pub use token::{Token, TokenInput};
