//! Business logic services

pub mod auth_service;
pub mod problem_service;
pub mod submission_service;

pub use auth_service::AuthService;
pub use problem_service::ProblemService;
pub use submission_service::SubmissionService;
