//! Picture URI composition.

/// Resolves stored picture references to absolute, public URLs.
///
/// Storage keeps picture locations in relative form (`images/products/1.png`);
/// the API surface must never expose that raw value. Composition is pure and
/// idempotent: an already-absolute reference passes through unchanged, so
/// re-composing a composed URI is a no-op.
pub struct UriComposer {
    base_url: String,
}

impl UriComposer {
    /// Creates a composer over the configured picture base URL.
    ///
    /// The base is normalized to end with a single `/` so joining never
    /// produces doubled or missing separators.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    /// Composes an absolute picture URI from a stored reference.
    pub fn compose_pic_uri(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return reference.to_string();
        }

        format!("{}{}", self.base_url, reference.trim_start_matches('/'))
    }
}
