pub mod commands;
pub mod interact;
