pub mod event;
pub mod notification;
pub mod translation;
pub mod validation;
