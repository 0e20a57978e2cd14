// ABOUTME: Token config normalization, property classification and token resolution
// ABOUTME: Also renders token documentation and holds the swappable active config

pub mod classify;
pub mod color;
pub mod doc_blocks;
pub mod docs;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod properties;
pub mod resolve;
pub mod sort_key;
pub mod store;

pub use classify::classify;
pub use doc_blocks::{BlockId, insert_block};
pub use error::{ConfigError, Result};
pub use loader::load_token_config;
pub use normalize::{TokenConfig, normalize, normalize_str};
pub use properties::category_for_property;
pub use resolve::{resolve, resolve_scale, sanitize_quoted};
pub use sort_key::sort_key;
pub use store::ConfigStore;
