pub mod domain;
pub mod handlers;
pub mod shared;
pub mod system;
