pub mod catalog;
pub mod format;
pub mod llama;
pub mod protocols;
pub mod server;
pub mod sorting;
