//! Endpoint tests drive the handlers through an in-memory actix service with
//! a mocked storage backend, so they cover deserialization, dispatch and the
//! response envelope without a database.
mod catalog;
mod deposits;
mod helpers;
mod mocks;
mod ratings;
mod reports;
mod tools;
