pub mod endpoints;
pub mod fetch;
