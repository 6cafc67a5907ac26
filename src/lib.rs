//! Credit Score Demo API Library
//!
//! This library provides the core functionality for the credit score demo
//! service: the applicant validation gate, the canned-profile score
//! resolver, the mock sign-in session and the HTTP handlers around them.
//!
//! # Modules
//!
//! - `api`: API definitions.
//! - `core`: Core business logic.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Request, report and error models.
//! - `profiles`: Canned profile table loading.
//! - `routes`: Router assembly.
//! - `scoring`: Score resolution.
//! - `session`: Mock sign-in session.
//! - `validation`: Applicant validation gate.

pub mod api;
pub mod core;

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod profiles;
pub mod routes;
pub mod scoring;
pub mod session;
pub mod validation;
