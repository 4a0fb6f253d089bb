/// Severidad del snackbar
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeSeverity {
    Info,
    Success,
    Error,
}

impl NoticeSeverity {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeSeverity::Info => "notice info",
            NoticeSeverity::Success => "notice success",
            NoticeSeverity::Error => "notice error",
        }
    }
}

/// Mensaje transitorio para el despachador
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub message: String,
    pub severity: NoticeSeverity,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: NoticeSeverity::Info }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: NoticeSeverity::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: NoticeSeverity::Error }
    }
}
