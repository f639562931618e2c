pub mod args;
pub mod options;
