pub mod cargo;
pub mod command;
pub mod project_builder;
