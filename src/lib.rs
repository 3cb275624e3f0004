//! Server-rendered blog service.
//!
//! Four request handlers make up the behavioral surface: the post list,
//! the post detail page with its comments, share-a-post-by-email, and
//! comment submission. Persistence goes through the [`db::BlogRepo`]
//! collaborator, outbound email through [`mailer::Mailer`].

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod mailer;
pub mod models;
pub mod pagination;
pub mod render;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
