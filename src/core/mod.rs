pub mod traits;
pub mod types;

pub use traits::{Commit, Verify};
pub use types::{Bytes, Challenge, Commitment, ProofBundle, Salt, Secret};
