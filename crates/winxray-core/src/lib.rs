pub mod common;
pub mod domain;
pub mod options;
pub mod program;
pub mod wxc;
