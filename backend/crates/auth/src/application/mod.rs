//! Application Layer - Use cases

pub mod config;
pub mod is_admin;
pub mod login;
pub mod register;

pub use is_admin::{IsAdminInput, IsAdminOutput, IsAdminUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
