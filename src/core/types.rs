use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw byte wrapper
pub type Bytes = Vec<u8>;

/// Random bytes mixed into every hash within one session. The same
/// salt must be used for commitment generation and verification, or
/// verification is meaningless.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salt {
    pub inner: Bytes,
}

// Redacted: the salt is never printed or logged.
impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({} bytes)", self.inner.len())
    }
}

/// The committed value, chosen by the committing party. Immutable
/// once set and never displayed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub inner: String,
}

// Redacted: the secret is never printed or logged.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<redacted>)")
    }
}

/// Hex-encoded salted SHA-256 digest binding the committer to a
/// secret without revealing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub inner: String,
}

/// Hex-encoded salted SHA-256 digest of the random draw. Displayed to
/// the verifying party but never itself checked against anything; the
/// verifier only checks the secret-derived commitment. Known gap in
/// the scheme, kept as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub inner: String,
}

/// Output of commitment generation: the challenge to display, the
/// commitment to check responses against, and the secret that was
/// committed to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBundle {
    pub challenge: Challenge,
    pub commitment: Commitment,
    pub secret: Secret,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = Secret {
            inner: "my_secret".to_string(),
        };
        let printed = format!("{:?}", secret);
        assert!(!printed.contains("my_secret"));
    }

    #[test]
    fn test_salt_debug_is_redacted() {
        let salt = Salt {
            inner: b"0123456789abcdef".to_vec(),
        };
        let printed = format!("{:?}", salt);
        assert!(!printed.contains("0123456789abcdef"));
        assert_eq!(printed, "Salt(16 bytes)");
    }
}
