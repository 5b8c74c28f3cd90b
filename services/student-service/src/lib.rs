//! Student microservice
//!
//! CRUD store over a seeded in-memory student list; the student-side
//! counterpart of the course service.

pub mod models;
pub mod server;
pub mod store;

pub use server::app;
pub use store::StudentStore;
