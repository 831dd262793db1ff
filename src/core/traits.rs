use crate::{
    core::types::{Commitment, ProofBundle, Salt, Secret},
    error::CommitError,
};

pub trait Commit {
    fn generate_proof(&self, secret: Secret, salt: &Salt) -> Result<ProofBundle, CommitError>;
}

pub trait Verify {
    fn verify(&self, commitment: &Commitment, response: &str, salt: &Salt) -> bool;
}
