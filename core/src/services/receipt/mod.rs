//! Receipt service module

mod service;

pub use service::ReceiptService;
