//! Name/value pairs offered by selection prompts.

/// A selectable entry: the `name` is displayed, the `value` is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub name: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
