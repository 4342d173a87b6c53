pub mod criteria;
pub mod export;
pub mod history;
pub mod init;
pub mod submit;
pub mod validate;
