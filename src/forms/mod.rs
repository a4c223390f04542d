pub mod dispatch;
pub mod honeypot;
pub mod parser;
pub mod schema;
pub mod variants;
