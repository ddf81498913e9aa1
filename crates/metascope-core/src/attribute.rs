//! Attribute tags attached to classes and entities.

/// A single attribute tag.
///
/// Tags are keyed by name. A tag may carry a value (`name = "value"`) and
/// positional arguments (`name(a, b)`), both optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Tag name.
    pub name: String,
    /// Optional value.
    pub value: Option<String>,
    /// Positional arguments, in source order.
    pub args: Vec<String>,
}

impl Attribute {
    /// Create a bare tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            args: Vec::new(),
        }
    }

    /// Create a tag with a value.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            args: Vec::new(),
        }
    }

    /// Add a positional argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// Ordered set of attribute tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    tags: Vec<Attribute>,
}

impl Attributes {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag. A tag with the same name is replaced in place.
    pub fn insert(&mut self, attribute: Attribute) {
        match self.tags.iter_mut().find(|t| t.name == attribute.name) {
            Some(existing) => *existing = attribute,
            None => self.tags.push(attribute),
        }
    }

    /// Check if a tag is present.
    pub fn has(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    /// Get a tag by name.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.tags.iter().find(|t| t.name == name)
    }

    /// Get a tag's value, if the tag exists and has one.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|t| t.value.as_deref())
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over tags in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.tags.iter()
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for attr in iter {
            attrs.insert(attr);
        }
        attrs
    }
}
