use thiserror::Error;

/// Lookup failures raised by the data stores
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("property {0} not found")]
    PropertyNotFound(u32),

    #[error("favorite {0} not found")]
    FavoriteNotFound(u32),

    #[error("no favorite saved for property {0}")]
    NoFavoriteForProperty(u32),

    #[error("no neighborhood report for property {0}")]
    NeighborhoodNotFound(u32),
}

pub type StoreResult<T> = Result<T, StoreError>;
