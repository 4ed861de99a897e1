pub mod adaptors;
pub mod db;
pub mod listings;
