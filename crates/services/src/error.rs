//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use edubot_core::model::{DocumentTextError, TopicError};
use edubot_core::quiz::InsufficientContent;
use edubot_core::search::SearchMiss;
use storage::repository::StorageError;

/// Errors emitted by `StudySession` lookups.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyError {
    #[error("upload a PDF first")]
    NoDocument,
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    NotFound(#[from] SearchMiss),
    #[error(transparent)]
    InsufficientContent(#[from] InsufficientContent),
}

/// Errors emitted while loading a document into the session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error reading PDF: {0}")]
    Unreadable(String),
    #[error(transparent)]
    Empty(#[from] DocumentTextError),
}

/// Errors emitted by `ReminderService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReminderServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the weather, news and quote clients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    #[error("API key missing in config")]
    MissingApiKey,
    #[error("upstream returned an empty response")]
    EmptyResponse,
    #[error("upstream request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
