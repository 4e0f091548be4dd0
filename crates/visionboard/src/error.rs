pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Layout(#[from] otter::Error),

    #[error("Unknown card: {id}")]
    UnknownCard { id: String },

    #[error("A card cannot be linked to itself: {id}")]
    SelfLink { id: String },

    #[error("Invalid board config: {message}")]
    InvalidConfig { message: String },
}
