//! Application layer containing services, DTOs, and use cases.

/// Request/response DTOs for commands and action callbacks.
pub mod dto;
/// Pure services: command-line parsing and message rendering.
pub mod services;
/// Workflow use cases: direct post and preview.
pub mod use_cases;
