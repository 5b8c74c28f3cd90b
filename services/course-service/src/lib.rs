//! Course microservice
//!
//! CRUD store over a seeded in-memory course list, reachable only through
//! the campus gateway in deployment but independently runnable.

pub mod models;
pub mod server;
pub mod store;

pub use server::app;
pub use store::CourseStore;
