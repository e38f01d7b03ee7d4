//! Ordered candidate list backing a wheel.
//!
//! The list is the single source of truth for segment order: the spin index
//! math in [`crate::spin`] depends on insertion order, so every mutation
//! here either preserves order (append, single removal) or rebuilds the
//! list wholesale.

/// Ordered list of candidate labels.
///
/// Labels are trimmed, non-empty strings. Duplicates are permitted and are
/// treated as distinct entries by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModel {
    labels: Vec<String>,
}

impl ListModel {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Creates a list from existing labels, trimming and dropping empties.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = labels
            .into_iter()
            .filter_map(|s| {
                let trimmed = s.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        Self { labels }
    }

    /// Rebuilds the list wholesale from free text.
    ///
    /// Splits on line breaks, trims each line, and discards empty or
    /// whitespace-only lines while preserving order.
    pub fn set_from_text(&mut self, text: &str) {
        self.labels = Self::parse_lines(text);
    }

    /// Appends entries parsed from free text after the existing entries.
    ///
    /// In addition to line breaks this also splits on commas and the
    /// full-width comma `、`, so a quick-add field accepts "A, B、C".
    /// Returns the number of entries appended (zero tokens is a no-op).
    pub fn append_from_text(&mut self, text: &str) -> usize {
        let tokens: Vec<String> = text
            .split(['\n', ',', '、'])
            .map(|s| s.trim_matches('\r').trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        let added = tokens.len();
        self.labels.extend(tokens);
        added
    }

    /// Removes the first entry equal to `label`.
    ///
    /// Silent no-op if the label is absent. Used for "remove after pick",
    /// where the picked label is always drawn from the current list.
    pub fn remove_first_occurrence(&mut self, label: &str) {
        if let Some(pos) = self.labels.iter().position(|l| l == label) {
            self.labels.remove(pos);
        }
    }

    /// Shuffles the list in place (Fisher-Yates).
    ///
    /// No-op when the list has fewer than two entries.
    pub fn shuffle(&mut self) {
        if self.labels.len() < 2 {
            return;
        }
        for i in (1..self.labels.len()).rev() {
            let j = fastrand::usize(..=i);
            self.labels.swap(i, j);
        }
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Returns the labels in order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the label at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Renders the list back to newline-separated text (for the editor).
    #[must_use]
    pub fn to_text(&self) -> String {
        self.labels.join("\n")
    }

    /// Splits text on line breaks, trims, and drops empty lines.
    fn parse_lines(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
