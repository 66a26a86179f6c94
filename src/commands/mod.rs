pub mod init;
pub mod projects;
