//! Small helpers used by tests and clients: URL building and object factories.

use std::fmt::{self, Display};
use thiserror::Error;

/// Builds `prefix/seg1/seg2?k=v&...`. Query pairs with no value are skipped.
#[derive(Clone, Debug, Default)]
pub struct UrlBuilder {
    prefix: String,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl UrlBuilder {
    pub fn new(prefix: impl Into<String>) -> Self {
        UrlBuilder {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    pub fn segment(mut self, segment: impl Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn query<V: Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.query.push((key.to_string(), v.to_string()));
        }
        self
    }

    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl Display for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        if !self.segments.is_empty() {
            write!(f, "/{}", self.segments.join("/"))?;
        }
        for (i, (k, v)) in self.query.iter().enumerate() {
            write!(f, "{}{}={}", if i == 0 { '?' } else { '&' }, k, v)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FactoryError {
    #[error("batch must be at least 1, got {0}")]
    EmptyBatch(usize),
}

/// Produces fresh objects from a default constructor.
pub struct Factory<T> {
    make: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> Factory<T> {
    pub fn new(make: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Factory { make: Box::new(make) }
    }

    pub fn build(&self) -> T {
        (self.make)()
    }

    /// A default object with some fields overridden.
    pub fn build_with(&self, overrides: impl FnOnce(&mut T)) -> T {
        let mut obj = self.build();
        overrides(&mut obj);
        obj
    }

    pub fn batch(&self, n: usize) -> Result<Vec<T>, FactoryError> {
        if n < 1 {
            return Err(FactoryError::EmptyBatch(n));
        }
        Ok((0..n).map(|_| self.build()).collect())
    }
}
