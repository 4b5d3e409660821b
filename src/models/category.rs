#[derive(Debug, Clone)]
pub struct Category {
    pub id: Option<i64>,
    pub user_id: i64,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl Category {
    pub fn new(user_id: i64, name: String) -> Self {
        Self {
            id: None,
            user_id,
            name,
            color: String::new(),
            icon: String::new(),
        }
    }

    /// Find a category by name (case-insensitive) in a slice.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        let lower = name.to_lowercase();
        categories.iter().find(|c| c.name.to_lowercase() == lower)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
