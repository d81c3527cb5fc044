//! Content model - the currency passed between assets
//!
//! A `State` is the ordered output of one asset's generation. Positions are
//! meaningful: each asset documents what lives at each index, and consumers
//! address contents by position rather than by inspecting the data.

/// One value within a `State`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    name: Option<String>,
    data: Vec<u8>,
}

impl Content {
    /// Positional content with no name
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: None,
            data: data.into(),
        }
    }

    /// Labeled content, for assets that emit named fields
    pub fn named(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: Some(name.into()),
            data: data.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// UTF-8 view of the data, `None` if the bytes are not valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}

/// Ordered sequence of contents produced by one `Asset::generate` call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    contents: Vec<Content>,
}

impl State {
    pub fn new(contents: Vec<Content>) -> Self {
        Self { contents }
    }

    /// Build a state from raw strings, one unnamed content per value, in order.
    pub fn from_strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            contents: values
                .into_iter()
                .map(|v| Content::new(v.as_ref().as_bytes()))
                .collect(),
        }
    }

    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    pub fn get(&self, index: usize) -> Option<&Content> {
        self.contents.get(index)
    }

    /// String at `index`, if present and valid UTF-8
    pub fn str_at(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Content::as_str)
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
