use http::header;
use std::borrow::Cow;

use crate::request::RequestView;

mod builder;
pub use builder::TokenResolverBuilder;

/// Immutable snapshot of a [`TokenResolverBuilder`], reusable across
/// requests and threads.
#[derive(Clone, Debug)]
pub struct TokenResolver {
    pub(crate) scheme: String,
    pub(crate) query_parameter: String,
    pub(crate) accepts_header: bool,
    pub(crate) accepts_query: bool,
}

impl TokenResolver {
    /// Returns the token carried by `request`, or `None` when no enabled
    /// source yields one. The `Authorization` header wins over the query
    /// string when both are enabled and present.
    pub fn resolve<R>(&self, request: &R) -> Option<String>
    where
        R: RequestView,
    {
        if self.accepts_header {
            if let Some(token) = self.from_header(request) {
                return Some(token);
            }
        }

        if self.accepts_query {
            if let Some(token) = self.from_query(request) {
                return Some(token);
            }
        }

        None
    }

    fn from_header<R: RequestView>(&self, request: &R) -> Option<String> {
        let values = request.header_values(header::AUTHORIZATION.as_str())?;
        let value: &str = values.first()?;

        // The scheme matches as a prefix over its exact byte length;
        // `get` rejects short values and mid-character splits.
        let prefix = value.get(..self.scheme.len())?;
        if !prefix.eq_ignore_ascii_case(&self.scheme) {
            return None;
        }

        let token = value[self.scheme.len()..].trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_owned())
        }
    }

    fn from_query<R: RequestView>(&self, request: &R) -> Option<String> {
        let values = request.query_values(&self.query_parameter)?;
        values.into_iter().next().map(Cow::into_owned)
    }
}
