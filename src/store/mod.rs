//! Data-access layer: per-resource CRUD against PostgreSQL.
//!
//! Each module exposes `list`, `get`, `create`, `update`, `delete` over a
//! connection pool. Updates merge only the supplied fields over the existing
//! row and refresh `updated_at`.

pub mod categories;
pub mod events;
pub mod registrations;
pub mod tickets;
pub mod users;
pub mod venues;
