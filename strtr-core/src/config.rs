//! Replacer configuration

use crate::ordering::OrderingMode;

/// Configuration for a [`Replacer`](crate::Replacer)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Needle priority order
    #[cfg_attr(feature = "serde", serde(default))]
    pub ordering: OrderingMode,
}

impl Config {
    /// Longest needles first (the default)
    pub fn longest_first() -> Self {
        Self {
            ordering: OrderingMode::LengthDescendingThenLexicographic,
        }
    }

    /// Needles in table order
    pub fn insertion_order() -> Self {
        Self {
            ordering: OrderingMode::InsertionOrder,
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the ordering mode
    pub fn ordering(mut self, ordering: OrderingMode) -> Self {
        self.config.ordering = ordering;
        self
    }

    /// Use longest-first ordering
    pub fn longest_first(self) -> Self {
        self.ordering(OrderingMode::LengthDescendingThenLexicographic)
    }

    /// Use insertion ordering
    pub fn insertion_order(self) -> Self {
        self.ordering(OrderingMode::InsertionOrder)
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
