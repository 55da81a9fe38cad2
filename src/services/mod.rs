pub mod token;

pub use token::{TokenConfig, TokenError, TokenService, parse_token_id};
