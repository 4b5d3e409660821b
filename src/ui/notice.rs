/// How loudly a notice should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Default,
    Destructive,
}

/// A transient notification shown in the message bar. Errors get the
/// `Destructive` severity; everything else stays calm.
#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) severity: Severity,
}

impl Notice {
    pub(crate) fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub(crate) fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    /// Single-line rendering for the message bar.
    pub(crate) fn text(&self) -> String {
        if self.description.is_empty() {
            self.title.clone()
        } else if self.title.is_empty() {
            self.description.clone()
        } else {
            format!("{}: {}", self.title, self.description)
        }
    }
}
