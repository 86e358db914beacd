pub mod configure;
pub mod fetch;
