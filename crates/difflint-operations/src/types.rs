use std::fmt;

/// A branch by name. The commit it points at is resolved fresh by every
/// operation that needs it, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchRef {
    name: String,
}

impl BranchRef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BranchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for BranchRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for BranchRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
