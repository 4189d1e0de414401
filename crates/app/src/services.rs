//! Application services: in-process port implementations.

pub mod static_users;
