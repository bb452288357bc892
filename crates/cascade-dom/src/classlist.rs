//! Class list tokenizer
//!
//! Splits a `class` attribute value into class names.

/// Ordered class names parsed from a comma and/or whitespace separated list
#[derive(Debug, Clone, Copy)]
pub struct ClassList<'a> {
    source: &'a str,
}

impl<'a> ClassList<'a> {
    /// Parse from a class list string
    pub fn parse(source: &'a str) -> Self {
        Self { source }
    }

    /// Iterate over tokens in declaration order
    pub fn iter(self) -> impl Iterator<Item = &'a str> {
        self.source
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|token| !token.is_empty())
    }

    /// Check if a class name is listed
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|token| token == name)
    }

    /// Number of tokens
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Get token at index
    pub fn item(&self, index: usize) -> Option<&'a str> {
        self.iter().nth(index)
    }
}

impl<'a> IntoIterator for ClassList<'a> {
    type Item = &'a str;
    type IntoIter = Box<dyn Iterator<Item = &'a str> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl std::fmt::Display for ClassList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tokens: Vec<&str> = self.iter().collect();
        write!(f, "{}", tokens.join(" "))
    }
}
