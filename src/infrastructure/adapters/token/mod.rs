//! Token Adapter - JWT 签发与校验实现

mod jwt_issuer;

pub use jwt_issuer::*;
