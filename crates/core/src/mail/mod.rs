//! Mail recipient resolution

pub mod ports;
pub mod service;

pub use service::MailRecipientService;
