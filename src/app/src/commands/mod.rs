pub mod dialog;
pub mod download;
pub mod timer;
