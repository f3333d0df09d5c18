pub mod endpoints;
pub mod models;
