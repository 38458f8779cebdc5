pub mod validator;

pub use validator::ContactFormValidator;
