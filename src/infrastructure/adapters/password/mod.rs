//! Password Adapter - bcrypt 密码校验实现

mod bcrypt_verifier;

pub use bcrypt_verifier::*;
