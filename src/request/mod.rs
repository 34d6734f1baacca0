use http::Request;

mod view;
pub use view::RequestView;

use crate::resolver::TokenResolver;

pub trait RequestExt {
    fn resolve_token(&self, resolver: &TokenResolver) -> Option<String>;
}

impl<B> RequestExt for Request<B> {
    #[inline]
    fn resolve_token(&self, resolver: &TokenResolver) -> Option<String> {
        resolver.resolve(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::TokenResolverBuilder;
    use http::header;

    #[test]
    fn it_works() {
        let resolver = TokenResolverBuilder::new()
            .enable_authentication_header()
            .build();
        let req = Request::builder()
            .header(header::AUTHORIZATION, "Bearer 1234")
            .body(())
            .unwrap();
        assert_eq!(req.resolve_token(&resolver).unwrap(), "1234");
    }
}
