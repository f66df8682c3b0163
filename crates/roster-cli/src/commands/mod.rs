pub mod directory;
pub mod mutation;
pub mod serve;
