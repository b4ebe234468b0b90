// src/application/commands/users/mod.rs
mod login;
mod register;
mod service;
mod session;

pub use login::LoginUserCommand;
pub use register::{REGISTRATION_RETRY_WINDOW_SECS, RegisterUserCommand};
pub use service::UserCommandService;
