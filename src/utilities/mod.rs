pub mod http_client;
pub mod links_reader;
pub mod output;
