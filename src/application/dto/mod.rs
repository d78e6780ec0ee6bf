//! Data-transfer objects exchanged with the host.

mod action_dto;
mod command_dto;

pub use action_dto::ActionRequest;
pub use command_dto::{CommandRequest, CommandResponse, ResponseType};
