//! Authentication adapters.
//!
//! - `jwt` - HS256 tokens for the `TokenService` port
//! - `bcrypt_hasher` - bcrypt for the `PasswordHasher` port

mod bcrypt_hasher;
mod jwt;

pub use bcrypt_hasher::{BcryptPasswordHasher, DEFAULT_BCRYPT_COST};
pub use jwt::JwtTokenService;
