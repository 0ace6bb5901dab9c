// src/ports/mod.rs

pub use framework_precedence::FrameworkPrecedenceService;
pub use tools_factory::ToolsFactory;
pub use tools_service::ToolsService;

pub mod framework_precedence;
pub mod tools_factory;
pub mod tools_service;
