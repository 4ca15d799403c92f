// Core allocation exports
pub mod allocation;
pub mod money;

pub use allocation::{allocate, equal_share, AllocationError, SplitStrategy};
pub use money::{format_amount, round_minor};
