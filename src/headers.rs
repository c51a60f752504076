use indexmap::IndexMap;

/// Ordered, case-insensitive collection of header name/value pairs.
///
/// Names keep the spelling they were last inserted with, while lookups ignore
/// ASCII case. Insertion order is preserved, and replacing an existing header
/// keeps its original position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, (String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&fold(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&fold(name))
    }

    /// Inserts or replaces a header, returning the previous value.
    pub fn insert<N, V>(&mut self, name: N, value: V) -> Option<String>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        self.entries
            .insert(fold(&name), (name, value.into()))
            .map(|(_, previous)| previous)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries
            .shift_remove(&fold(name))
            .map(|(_, value)| value)
    }

    /// Returns a new collection where every entry of `other` overrides the
    /// matching entry of `self`.
    pub fn merged(mut self, other: &Headers) -> Self {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.remove(name);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl<N, V> Extend<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoValues<String, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
