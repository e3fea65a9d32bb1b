//! Synthetic names for anonymous records.

/// Issues `Anonymous1`, `Anonymous2`, ... for one generator.
///
/// A number is consumed only when a new name is issued and is never handed
/// out twice, so two distinct anonymous records can never share a name.
#[derive(Clone, Debug, Default)]
pub struct AnonymousNames {
    issued: u32,
}

impl AnonymousNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> String {
        self.issued += 1;
        format!("Anonymous{}", self.issued)
    }

    /// How many names have been issued so far.
    pub fn issued(&self) -> u32 {
        self.issued
    }
}
