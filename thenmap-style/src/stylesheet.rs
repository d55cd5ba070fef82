//! The mutable style buffer.

/// Style buffer split into two logical segments: base presentation rules
/// and colorization rules.
///
/// The base segment is installed once at initialization and only replaced
/// wholesale. The colorization segment is appended to by colorization
/// passes and must be cleared before every new pass — re-rendering it from
/// scratch is what makes repeated colorization idempotent (the Nth data
/// set's rules are active, never a superposition of all N).
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    base: String,
    appended: String,
}

impl StyleSheet {
    /// Creates an empty style buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire content with `base` and drops any appended
    /// colorization rules.
    pub fn reset(&mut self, base: impl Into<String>) {
        self.base = base.into();
        self.appended.clear();
    }

    /// Appends rules to the colorization segment.
    pub fn append(&mut self, rules: &str) {
        self.appended.push_str(rules);
    }

    /// Clears the colorization segment, leaving the base rules intact.
    pub fn clear_appended(&mut self) {
        self.appended.clear();
    }

    /// Renders the full style content: base rules followed by the
    /// colorization segment.
    #[must_use]
    pub fn content(&self) -> String {
        let mut content = String::with_capacity(self.base.len() + self.appended.len());
        content.push_str(&self.base);
        content.push_str(&self.appended);
        content
    }

    /// The base segment.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The colorization segment.
    #[must_use]
    pub fn appended(&self) -> &str {
        &self.appended
    }
}
