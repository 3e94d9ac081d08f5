//! Calendar provider implementations and factory

pub mod factory;
pub mod noop;

pub use factory::create_provider;
pub use noop::NoopCalendarProvider;
