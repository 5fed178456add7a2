pub mod assembler;
pub mod fetch;
pub mod postprocess;
