/// The signed-in user as supplied by the session layer.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl Profile {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: None,
            name,
            email,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Label shown in the status bar: display name, falling back to email.
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.email.is_empty() {
            &self.email
        } else {
            "User"
        }
    }
}
