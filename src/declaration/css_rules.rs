use std::ops::Deref;

/// Ordered CSS selectors without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssRules(Vec<String>);

impl CssRules {
    pub fn new() -> Self {
        CssRules::default()
    }

    /// Appends `selector` unless it is already listed. Returns whether it was added.
    pub fn add(&mut self, selector: impl Into<String>) -> bool {
        let selector = selector.into();
        if selector.is_empty() || self.0.contains(&selector) {
            return false;
        }

        self.0.push(selector);
        true
    }

    /// Replaces the selector at `index`, an empty value removes it.
    pub fn change(&mut self, index: usize, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.remove(index);
            return;
        }

        if let Some(selector) = self.0.get_mut(index) {
            *selector = value;
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.0.len() {
            self.0.remove(index);
        }
    }
}

impl Deref for CssRules {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for CssRules {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut rules = CssRules::new();
        for selector in iter {
            rules.add(selector);
        }
        rules
    }
}
