//! Authentication state
//!
//! - [`Session`]: token slot plus the decoded claims of the current user
//! - [`TokenStorage`]: where the slot lives (file or memory)

mod session;
mod storage;

pub use session::{Session, TokenClaims};
pub use storage::{FileTokenStorage, MemoryTokenStorage, TOKEN_KEY, TokenStorage};
