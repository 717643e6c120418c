//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod department_service;
pub mod post_service;
