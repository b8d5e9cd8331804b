pub mod repository;
pub mod shared;
pub mod token_set;

pub use repository::{is_valid_slug, CityTokens, TokenLoadError, TokenRepository};
pub use shared::SharedRepository;
pub use token_set::{merge, TokenSet, TokenValue};
