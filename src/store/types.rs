use serde::Serialize;

/// A registered account. Only `email` is inspected; deletion goes by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: u64,
    pub login: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(id: u64, login: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
            email: email.into(),
        }
    }
}
