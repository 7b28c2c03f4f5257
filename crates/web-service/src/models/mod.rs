pub mod common;
pub mod err;
pub mod hashtags;
pub mod projects;
