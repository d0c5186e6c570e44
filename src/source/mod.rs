pub mod provider;
pub mod json_file;

pub use provider::KeywordSource;
pub use json_file::JsonFileSource;
