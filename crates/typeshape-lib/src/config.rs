//! Rendering configuration.

pub const DEFAULT_HEADER: &str = "// DO NOT EDIT. This file is automatically generated.";

/// Configuration for schema rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// First line of the output
    pub(crate) header: String,
    /// One level of indentation
    pub(crate) indent: String,
    /// Whether top-level declarations carry `export`
    pub(crate) export: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            indent: "\t".to_string(),
            export: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header line.
    pub fn header(mut self, value: impl Into<String>) -> Self {
        self.header = value.into();
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Indent with `width` spaces instead of a tab.
    pub fn indent_width(self, width: usize) -> Self {
        self.indent(" ".repeat(width))
    }

    /// Set whether to export declarations.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }
}
