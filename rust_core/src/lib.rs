//! Homework Core - shared pieces of the homework status notifier.
//!
//! This module provides:
//! - The error taxonomy used across the poll pipeline
//! - Homework status model and verdict table
//! - Response shape validation
//! - Practicum API and Telegram Bot API clients

pub mod clients;
pub mod error;
pub mod models;

pub use error::{HomeworkError, HomeworkResult, ShapeError};
pub use models::HomeworkStatus;
