//! Field selection for document reads.
//!
//! `reported` and `delete_password` are hidden unless a read asks for them.

/// Which hidden fields a read should include.
///
/// The selection applies to the thread and to every reply embedded in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projection {
    /// Include the `reported` flag.
    pub reported: bool,
    /// Include the stored delete password hash.
    pub delete_password: bool,
}

impl Projection {
    /// Default projection: hidden fields excluded.
    pub const DEFAULT: Projection = Projection {
        reported: false,
        delete_password: false,
    };

    /// Include the delete password hash.
    pub fn with_delete_password(mut self) -> Self {
        self.delete_password = true;
        self
    }
}
