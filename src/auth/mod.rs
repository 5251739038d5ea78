//! Authentication layer: session tokens, password hashing, and the
//! session cookie contract.

pub mod cookie;
pub mod middleware;
pub mod password;
pub mod token;

pub use middleware::{AppState, AuthSession};
pub use password::{hash_password, verify_password};
pub use token::{issue, verify_full, verify_structural, Claims};
