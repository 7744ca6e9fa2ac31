#![forbid(unsafe_code)]

pub mod app_services;
pub mod document_service;
pub mod error;
pub mod feeds;
pub mod reminder_service;
pub mod study_service;

pub use edubot_core::Clock;

pub use app_services::AppServices;
pub use document_service::extract_pdf_text;
pub use error::{AppServicesError, DocumentError, FeedError, ReminderServiceError, StudyError};
pub use feeds::{NewsClient, QuoteClient, WeatherClient};
pub use reminder_service::ReminderService;
pub use study_service::StudySession;
