//! Front-end hosting.
//!
//! The service hosts the browser client's static bundle next to the REST API.
//!
//! # Modules
//!
//! - [`spa`] - Static files plus client-side route forwarding

pub mod spa;
