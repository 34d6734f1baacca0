use http::Request;
use std::borrow::Cow;

/// Read-only, multi-valued lookup over a request's query string and
/// headers. `None` means the name is absent; `Some` carries the values
/// in request order, possibly zero of them.
pub trait RequestView {
    fn query_values(&self, name: &str) -> Option<Vec<Cow<'_, str>>>;

    fn header_values(&self, name: &str) -> Option<Vec<Cow<'_, str>>>;
}

impl<B> RequestView for Request<B> {
    fn query_values(&self, name: &str) -> Option<Vec<Cow<'_, str>>> {
        let query = self.uri().query()?;
        let values: Vec<_> = form_urlencoded::parse(query.as_bytes())
            .filter_map(|(key, value)| if key == name { Some(value) } else { None })
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }

    fn header_values(&self, name: &str) -> Option<Vec<Cow<'_, str>>> {
        if !self.headers().contains_key(name) {
            return None;
        }

        // Values that are not visible ASCII are skipped, which can leave
        // the name present with zero values.
        let values = self
            .headers()
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(Cow::Borrowed)
            .collect();
        Some(values)
    }
}
