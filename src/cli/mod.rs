mod generate;
mod models;
mod root;

pub use root::Cli;
