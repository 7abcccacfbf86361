pub mod config;
pub mod logging;

pub mod error;
pub mod fetch;
pub mod link;
pub mod page;
pub mod redirect;
pub mod resolver;
pub mod response;
pub mod schema;
pub mod title;

pub use error::{ResolveError, ResolveFailure, Result};
pub use resolver::{resolve_share_text, ResolutionResult, ShareResolver, Stage};
pub use response::ShareResponse;
