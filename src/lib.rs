pub mod constants;
mod context;
mod cors;
mod credentials;
mod error;
mod header_builder;
mod header_list;
mod headers;
mod options;
mod origin;
mod resolver;
mod truthy;
mod util;
pub mod vary;

pub use context::{Context, Exchange};
pub use cors::{Cors, CorsOutcome};
pub use credentials::Credentials;
pub use error::{BoxError, HttpError, VaryError};
pub use header_list::HeaderList;
pub use headers::Headers;
pub use options::CorsOptions;
pub use origin::{Origin, OriginDecision};
pub use resolver::{ResolveFuture, ResolverFn};
pub use truthy::Truthy;
