pub mod server;
pub mod terminal;
