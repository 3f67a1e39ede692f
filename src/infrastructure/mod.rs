pub mod persistence;
pub mod providers;
