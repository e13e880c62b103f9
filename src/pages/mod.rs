pub mod home;
pub mod protocols;
