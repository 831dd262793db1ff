//! Line-based text interface for one exchange.
//!
//! The input side is injected as any [`BufRead`], so the exchange can
//! be driven by a test buffer as easily as by stdin.

use std::io::{BufRead, Write};

use crate::{
    backend::sha256_commit::{Sha256Committer, Sha256Verifier},
    core::{Commit, Secret, Verify},
    error::CommitError,
    session::Session,
};

/// Runs one exchange: print the challenge, prompt for a single
/// response line, print the verdict. Returns the verdict.
///
/// Output is exactly two lines plus the prompt. Neither the secret
/// nor the salt ever appears on the output side.
pub fn run_exchange<R: BufRead, W: Write>(
    session: &Session,
    secret: Secret,
    input: &mut R,
    output: &mut W,
) -> Result<bool, CommitError> {
    let committer = Sha256Committer::new(session.config().clone());
    let bundle = committer.generate_proof(secret, session.salt())?;

    writeln!(output, "Proof: {}", bundle.challenge.inner).map_err(io_err)?;
    write!(output, "{}", session.config().prompt).map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut response = String::new();
    input.read_line(&mut response).map_err(io_err)?;
    let response = response.trim_end_matches(['\r', '\n']);

    let verified = Sha256Verifier.verify(&bundle.commitment, response, session.salt());
    writeln!(output, "Verified: {}", verified).map_err(io_err)?;

    Ok(verified)
}

fn io_err(e: std::io::Error) -> CommitError {
    CommitError::Io(e.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::config::SchemeConfig;

    fn exchange(response_line: &str) -> (bool, String) {
        let session = Session::new(SchemeConfig::default()).unwrap();
        let secret = Secret {
            inner: "my_secret".to_string(),
        };
        let mut input = Cursor::new(response_line.as_bytes().to_vec());
        let mut output = Vec::new();

        let verified = run_exchange(&session, secret, &mut input, &mut output).unwrap();
        (verified, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_correct_response_verifies() {
        let (verified, output) = exchange("my_secret\n");
        assert!(verified);
        assert!(output.contains("Proof: "));
        assert!(output.contains("Verified: true"));
    }

    #[test]
    fn test_wrong_response_fails() {
        let (verified, output) = exchange("wrong\n");
        assert!(!verified);
        assert!(output.contains("Verified: false"));
    }

    #[test]
    fn test_empty_response_fails() {
        let (verified, _) = exchange("\n");
        assert!(!verified);
    }

    #[test]
    fn test_crlf_line_ending_is_stripped() {
        let (verified, _) = exchange("my_secret\r\n");
        assert!(verified);
    }

    #[test]
    fn test_output_never_contains_the_secret() {
        let (_, output) = exchange("my_secret\n");
        // The challenge and verdict lines carry hex digests and a
        // boolean only.
        assert!(!output.contains("my_secret"));
    }

    #[test]
    fn test_prompt_is_shown() {
        let (_, output) = exchange("my_secret\n");
        assert!(output.contains("Enter the card to verify: "));
    }
}
