pub mod date_time;
pub mod geometry;
pub mod reading;
pub mod station;
