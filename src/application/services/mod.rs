//! Business logic services for the application layer.

pub mod doc_request_service;

pub use doc_request_service::DocRequestService;
