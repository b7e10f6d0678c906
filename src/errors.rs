use std::fmt;

/// Main error type for the poke-master engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error related to battle or capture state
    Battle(BattleError),
    /// Error related to species catalog lookup or loading
    Catalog(CatalogError),
    /// Error related to the captured-creature collection
    Collection(CollectionError),
}

/// Errors raised by the battle simulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// An operation was invoked outside its precondition, e.g. resolving
    /// a turn after the battle ended or attempting a capture while the
    /// opponent is still above the capture threshold.
    InvalidState(String),
}

/// Errors related to species catalog operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The named species was not found in the catalog
    SpeciesNotFound(String),
    /// The species data file could not be read
    DataUnavailable(String),
    /// Species data is malformed or incomplete
    MalformedData(String),
}

/// Errors related to the captured-creature collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The last creature in the collection cannot be released
    LastCreature,
    /// No creature with the given name is in the collection
    NotFound(String),
    /// The collection file could not be read or written
    StorageUnavailable(String),
    /// Stored collection data is malformed
    MalformedData(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Battle(err) => write!(f, "Battle error: {}", err),
            EngineError::Catalog(err) => write!(f, "Catalog error: {}", err),
            EngineError::Collection(err) => write!(f, "Collection error: {}", err),
        }
    }
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::InvalidState(details) => write!(f, "Invalid battle state: {}", details),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::SpeciesNotFound(name) => write!(f, "Species not found: {}", name),
            CatalogError::DataUnavailable(details) => {
                write!(f, "Species data unavailable: {}", details)
            }
            CatalogError::MalformedData(details) => {
                write!(f, "Malformed species data: {}", details)
            }
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::LastCreature => {
                write!(f, "Cannot release the last creature in the collection")
            }
            CollectionError::NotFound(name) => {
                write!(f, "Creature not found in collection: {}", name)
            }
            CollectionError::StorageUnavailable(details) => {
                write!(f, "Collection storage unavailable: {}", details)
            }
            CollectionError::MalformedData(details) => {
                write!(f, "Malformed collection data: {}", details)
            }
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for BattleError {}
impl std::error::Error for CatalogError {}
impl std::error::Error for CollectionError {}

impl From<BattleError> for EngineError {
    fn from(err: BattleError) -> Self {
        EngineError::Battle(err)
    }
}

impl From<CatalogError> for EngineError {
    fn from(err: CatalogError) -> Self {
        EngineError::Catalog(err)
    }
}

impl From<CollectionError> for EngineError {
    fn from(err: CollectionError) -> Self {
        EngineError::Collection(err)
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using CollectionError
pub type CollectionResult<T> = Result<T, CollectionError>;
