pub mod json_file;
pub mod memory;

pub use json_file::JsonFileCredentials;
pub use memory::InMemoryCredentials;
