pub mod backends;
pub mod panels;
