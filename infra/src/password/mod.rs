//! Password hashing implementations

mod bcrypt_encoder;

pub use bcrypt_encoder::BcryptPasswordEncoder;
