//! Generic CRUD service shared by the book, task and post endpoints.

mod service;


pub use service::{parse_id, ResourceService};
