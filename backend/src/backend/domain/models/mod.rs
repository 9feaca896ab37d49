//! Domain model types shared across services and repositories.

pub mod case;
pub mod volunteer;
