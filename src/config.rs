use serde::{Deserialize, Serialize};

/// Scheme parameters shared by the committer and the verifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// Inclusive upper bound N of the random challenge draw [1, N].
    /// Arbitrary in this toy scheme, not a security parameter.
    pub challenge_upper_bound: u32,
    /// Salt length in bytes.
    pub salt_len: usize,
    /// Prompt shown when asking the verifying party for a response.
    pub prompt: String,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            challenge_upper_bound: 20,
            salt_len: 16,
            prompt: "Enter the card to verify: ".to_string(),
        }
    }
}
