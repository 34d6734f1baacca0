use http::Request;
use std::task::{Context, Poll};
use tower::{Layer, Service};

use crate::resolver::TokenResolver;

/// Token found by [`TokenResolverService`], stored in request extensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedToken(pub String);

#[derive(Clone, Debug)]
pub struct TokenResolverLayer {
    resolver: TokenResolver,
}

impl TokenResolverLayer {
    pub fn new(resolver: TokenResolver) -> Self {
        Self { resolver }
    }
}

impl<S> Layer<S> for TokenResolverLayer {
    type Service = TokenResolverService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TokenResolverService {
            inner,
            resolver: self.resolver.clone(),
        }
    }
}

/// Runs the resolver against each request and exposes the outcome to the
/// inner service. Requests without a token pass through untouched.
#[derive(Clone, Debug)]
pub struct TokenResolverService<S> {
    inner: S,
    resolver: TokenResolver,
}

impl<S, B> Service<Request<B>> for TokenResolverService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        if let Some(token) = self.resolver.resolve(&req) {
            req.extensions_mut().insert(ResolvedToken(token));
        }
        self.inner.call(req)
    }
}
