//! Pure transforms applied between the source and destination schemas

pub mod notebook;
pub mod translate;
