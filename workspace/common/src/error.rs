use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Card '{0}' is already registered")]
    DuplicateCard(String),

    #[error("No card titled '{0}'")]
    UnknownCard(String),
}
