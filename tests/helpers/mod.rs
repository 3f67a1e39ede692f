#![allow(dead_code)]
pub mod sources;
pub mod test_db;

pub use sources::*;
pub use test_db::*;
