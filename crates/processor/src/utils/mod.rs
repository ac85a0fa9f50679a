pub mod ibc_host;
pub mod numeric;
