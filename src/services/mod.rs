pub mod prompt_client;
pub mod transport;
