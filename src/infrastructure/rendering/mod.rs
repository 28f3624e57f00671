pub mod instructions;

pub use instructions::*;
