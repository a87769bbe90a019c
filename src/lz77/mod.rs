pub mod decoder;
pub mod encoder;
pub mod matcher;
pub mod token;

pub use decoder::decode;
pub use encoder::{encode, DEFAULT_WINDOW};
pub use matcher::{find_longest_match, MAX_MATCH, MAX_WINDOW};
pub use token::Token;
