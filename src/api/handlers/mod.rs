// src/api/handlers/mod.rs
mod fragments;
mod health;
mod pages;
mod static_files;

pub use fragments::{detail_fragment, list_fragment};
pub use health::health_check;
pub use pages::{expression_page, index, submit, SubmitForm};
pub use static_files::static_file_handler;
