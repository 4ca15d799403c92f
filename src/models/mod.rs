// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Allocation, ParticipantShare, UserId};
pub use requests::{ExpenseFilter, ExpenseIntent, FriendIntent, GroupIntent};
pub use responses::{ErrorResponse, GatewayResponse, HealthResponse};
