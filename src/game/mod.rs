pub mod catalog;
pub mod pages;
pub mod session;
pub mod zone;
