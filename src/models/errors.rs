/// Raised when a value outside one of the closed catalog enums reaches the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("unknown package tier `{0}`")]
    UnknownTier(String),
    #[error("unknown sort option `{0}`, expected popular|newest|alphabetical")]
    UnknownSort(String),
    #[error("unknown view mode `{0}`, expected grid|list")]
    UnknownView(String),
}
