pub mod csv_parser;
pub mod strict_quotes;
