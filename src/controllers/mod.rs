pub mod cli_handler;
