// Service exports
pub mod gateway;
pub mod payload;
pub mod splitwise;

pub use gateway::Gateway;
pub use payload::FlatBody;
pub use splitwise::{SplitwiseClient, SplitwiseError};
