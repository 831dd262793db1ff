use rand::Rng;

use crate::{
    config::SchemeConfig,
    core::{Challenge, Commit, Commitment, ProofBundle, Salt, Secret, Verify},
    error::CommitError,
    hash::sha256::salted_hash_hex,
};

/// Committer backed by a salted SHA-256 digest.
///
/// Produces the commitment `Hash(secret, salt)` and a challenge
/// `Hash(decimal(r), salt)` for a random draw r in [1, N]. The draw
/// uses a general-purpose RNG; only the salt comes from a secure
/// source. Demonstration-grade posture, preserved from the reference
/// behavior.
pub struct Sha256Committer {
    config: SchemeConfig,
}

impl Sha256Committer {
    pub fn new(config: SchemeConfig) -> Self {
        Self { config }
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.gen_range(1..=self.config.challenge_upper_bound)
    }
}

impl Commit for Sha256Committer {
    fn generate_proof(&self, secret: Secret, salt: &Salt) -> Result<ProofBundle, CommitError> {
        if secret.inner.is_empty() {
            return Err(CommitError::InvalidInput("empty secret".to_string()));
        }
        if salt.inner.is_empty() {
            return Err(CommitError::InvalidInput("empty salt".to_string()));
        }
        if self.config.challenge_upper_bound == 0 {
            return Err(CommitError::ConfigurationError(
                "challenge_upper_bound must be at least 1".to_string(),
            ));
        }

        let commitment = Commitment {
            inner: salted_hash_hex(&secret.inner, &salt.inner),
        };

        let r = self.draw(&mut rand::thread_rng());
        let challenge = Challenge {
            inner: salted_hash_hex(&r.to_string(), &salt.inner),
        };

        Ok(ProofBundle {
            challenge,
            commitment,
            secret,
        })
    }
}

/// Verifier counterpart: re-hashes the response with the session salt
/// and compares against the stored commitment.
pub struct Sha256Verifier;

impl Verify for Sha256Verifier {
    fn verify(&self, commitment: &Commitment, response: &str, salt: &Salt) -> bool {
        // Plain equality on the hex encoding, as in the reference. A
        // hardened deployment would compare in constant time.
        salted_hash_hex(response, &salt.inner) == commitment.inner
    }
}
