use super::TokenResolver;

const DEFAULT_SCHEME: &str = "bearer";
const DEFAULT_QUERY_PARAMETER: &str = "access_token";

/// Fluent configuration for a [`TokenResolver`]. Sources start disabled;
/// enabling one cannot be undone short of starting a new builder.
#[derive(Clone, Debug)]
pub struct TokenResolverBuilder {
    scheme: String,
    query_parameter: String,
    accepts_header: bool,
    accepts_query: bool,
}

impl TokenResolverBuilder {
    pub fn new() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_owned(),
            query_parameter: DEFAULT_QUERY_PARAMETER.to_owned(),
            accepts_header: false,
            accepts_query: false,
        }
    }

    /// Stored verbatim; matching at resolve time is case-insensitive.
    pub fn with_scheme(mut self, name: impl Into<String>) -> Self {
        self.scheme = name.into();
        self
    }

    pub fn with_query_parameter(mut self, name: impl Into<String>) -> Self {
        self.query_parameter = name.into();
        self
    }

    pub fn enable_query_string(mut self) -> Self {
        self.accepts_query = true;
        self
    }

    pub fn enable_authentication_header(mut self) -> Self {
        self.accepts_header = true;
        self
    }

    #[inline]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    #[inline]
    pub fn query_parameter(&self) -> &str {
        &self.query_parameter
    }

    #[inline]
    pub fn accepts_header(&self) -> bool {
        self.accepts_header
    }

    #[inline]
    pub fn accepts_query(&self) -> bool {
        self.accepts_query
    }

    /// Snapshots the current settings. The builder stays usable; later
    /// changes never reach resolvers already built.
    pub fn build(&self) -> TokenResolver {
        TokenResolver {
            scheme: self.scheme.clone(),
            query_parameter: self.query_parameter.clone(),
            accepts_header: self.accepts_header,
            accepts_query: self.accepts_query,
        }
    }
}

impl Default for TokenResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let builder = TokenResolverBuilder::new();
        assert_eq!(builder.scheme(), "bearer");
        assert_eq!(builder.query_parameter(), "access_token");
        assert!(!builder.accepts_header());
        assert!(!builder.accepts_query());
    }

    #[test]
    fn mutators_store_verbatim() {
        let builder = TokenResolverBuilder::new()
            .with_scheme("helloscheme")
            .with_query_parameter("id_token");
        assert_eq!(builder.scheme(), "helloscheme");
        assert_eq!(builder.query_parameter(), "id_token");

        // No normalization, even though matching is case-insensitive.
        let builder = builder.with_scheme("BEARER");
        assert_eq!(builder.scheme(), "BEARER");
    }

    #[test]
    fn enable_flags() {
        let builder = TokenResolverBuilder::new()
            .enable_query_string()
            .enable_authentication_header();
        assert!(builder.accepts_header());
        assert!(builder.accepts_query());
    }
}
