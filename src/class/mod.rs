//! CSS class tokens for components.

use dioxus_core::{AttributeValue, prelude::*};
use smallvec::SmallVec;
use std::{borrow::Cow, fmt};

/// An ordered list of CSS class tokens attached to a component.
///
/// The tokens themselves are opaque to this crate; they belong to the
/// styling contract of the hosting page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Class {
    /// A list of class tokens.
    tokens: SmallVec<[&'static str; 8]>,
}

impl Class {
    /// Creates a new instance.
    #[inline]
    pub fn new(class: &'static str) -> Self {
        Self {
            tokens: class.split_whitespace().collect(),
        }
    }

    /// Creates a new instance when the condition holds, and an empty one otherwise.
    #[inline]
    pub fn check(class: &'static str, condition: bool) -> Self {
        if condition {
            Self::new(class)
        } else {
            Self::default()
        }
    }

    /// Adds a token to the list, omitting any that are already present.
    #[inline]
    pub fn add(&mut self, class: &'static str) {
        if !(class.is_empty() || self.contains(class)) {
            self.tokens.push(class);
        }
    }

    /// Removes a token from the list.
    #[inline]
    pub fn remove(&mut self, class: &str) {
        self.tokens.retain(|s| s != &class)
    }

    /// Replaces a token in the list with a new token.
    #[inline]
    pub fn replace(&mut self, class: &str, new_class: &'static str) {
        if let Some(index) = self.tokens.iter().position(|&s| s == class) {
            self.tokens[index] = new_class;
        }
    }

    /// Returns `true` if a given token has been added.
    #[inline]
    pub fn contains(&self, class: &str) -> bool {
        self.tokens.iter().any(|&s| s == class)
    }

    /// Returns `true` if the token list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Formats `self` as a `Cow<str>`.
    pub fn format(&self) -> Cow<'_, str> {
        match self.tokens.as_slice() {
            [] => Cow::Borrowed(""),
            [class] => Cow::Borrowed(class),
            tokens => Cow::Owned(tokens.join(" ")),
        }
    }
}

impl From<&'static str> for Class {
    #[inline]
    fn from(class: &'static str) -> Self {
        Self::new(class)
    }
}

impl<const N: usize> From<[&'static str; N]> for Class {
    #[inline]
    fn from(tokens: [&'static str; N]) -> Self {
        Self {
            tokens: SmallVec::from_slice(&tokens),
        }
    }
}

impl fmt::Display for Class {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let format = self.format();
        write!(f, "{format}")
    }
}

impl IntoAttributeValue for Class {
    #[inline]
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.format().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::Class;

    #[test]
    fn it_formats_tokens() {
        let class = Class::new("fixed inset-0 z-[100]");
        assert_eq!(class.format(), "fixed inset-0 z-[100]");

        let mut class = Class::new("animate-modal-in");
        class.replace("animate-modal-in", "animate-modal-out");
        class.add("opacity-0");
        assert_eq!(class.format(), "animate-modal-out opacity-0");
    }

    #[test]
    fn it_checks_conditional_tokens() {
        assert!(Class::check("opacity-0", false).is_empty());
        assert_eq!(Class::check("opacity-0", true).format(), "opacity-0");
    }

    #[test]
    fn it_deduplicates_tokens() {
        let mut class = Class::new("flex gap-3");
        class.add("flex");
        class.add("");
        assert_eq!(class.format(), "flex gap-3");
    }
}
