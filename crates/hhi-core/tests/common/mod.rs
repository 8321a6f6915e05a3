pub mod header_server;
