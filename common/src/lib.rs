pub mod config;
pub mod fragment;

mod macros;
