pub mod network_info;
pub mod projects;
pub mod security_news;
