mod layer;
pub use layer::{ResolvedToken, TokenResolverLayer, TokenResolverService};

mod request;
pub use request::{RequestExt, RequestView};

mod resolver;
pub use resolver::{TokenResolver, TokenResolverBuilder};
