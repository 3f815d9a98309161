//! Credentials: Argon2id password hashes ([`password`]) and signed bearer
//! tokens ([`jwt`]).

pub mod jwt;
pub mod password;
