use std::fmt;

/// The single administrator account
#[derive(Clone, PartialEq)]
pub struct Admin {
    pub id: i64,
    pub password_hash: String,
}

impl fmt::Debug for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
