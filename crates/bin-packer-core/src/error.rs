use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinPackError {
    /// The item is larger than an empty bin and can never be placed.
    #[error("Item of size {item} exceeds bin capacity {capacity}")]
    ItemTooLarge { item: u32, capacity: u32 },
    /// A packer tried to add an item to a bin without enough room.
    /// This is a bug in the packer, not a property of the input.
    #[error("Bin has {remaining} remaining but item of size {item} was added")]
    CapacityExceeded { item: u32, remaining: u32 },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BinPackError>;
