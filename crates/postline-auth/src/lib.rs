//! # postline-auth
//!
//! Authentication and authorization core for Postline.
//!
//! ## Modules
//!
//! - `password`: Argon2id credential hashing and password policy
//! - `jwt`: signed, expiring session tokens carrying a subject and a kind
//! - `session`: access/refresh pair issuance and refresh rotation
//! - `permission`: the role/ownership permission table and evaluator
//! - `bearer`: `Authorization` header parsing

pub mod bearer;
pub mod error;
pub mod jwt;
pub mod password;
pub mod permission;
pub mod principal;
pub mod session;

pub use bearer::parse_bearer;
pub use error::AuthError;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenKind};
pub use password::{PasswordHasher, PasswordValidator};
pub use permission::{PermissionEvaluator, PermissionTable, PermissionTarget};
pub use principal::Principal;
pub use session::{SessionIssuer, TokenPair};
