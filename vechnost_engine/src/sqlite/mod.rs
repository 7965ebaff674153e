//! Sqlite implementation of the storefront database traits.

pub mod db;

mod sqlite_impl;

pub use sqlite_impl::SqliteDatabase;
