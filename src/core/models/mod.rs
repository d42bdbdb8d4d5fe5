pub mod call_op;
pub mod log_entry;
pub mod user;
