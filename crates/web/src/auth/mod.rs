pub mod blacklist;
pub mod token;

pub use token::{Claims, TokenError, TokenService};
