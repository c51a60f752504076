/// A header value given either verbatim or as a list to be comma-joined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderList {
    Value(String),
    List(Vec<String>),
}

impl HeaderList {
    pub fn value<S: Into<String>>(value: S) -> Self {
        Self::Value(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Returns the header-ready value, or `None` when it would be empty.
    pub fn header_value(&self) -> Option<String> {
        let value = match self {
            HeaderList::Value(value) => value.clone(),
            HeaderList::List(values) => values.join(","),
        };
        (!value.is_empty()).then_some(value)
    }
}

impl From<&str> for HeaderList {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for HeaderList {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<Vec<String>> for HeaderList {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for HeaderList {
    fn from(values: Vec<&str>) -> Self {
        Self::list(values)
    }
}

impl<const N: usize> From<[&str; N]> for HeaderList {
    fn from(values: [&str; N]) -> Self {
        Self::list(values)
    }
}

#[cfg(test)]
#[path = "header_list_test.rs"]
mod header_list_test;
