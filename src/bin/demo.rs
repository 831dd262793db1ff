use std::io;

use commit_rs::{config::SchemeConfig, console::run_exchange, core::Secret, session::Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SchemeConfig::default();
    let session = Session::new(config)?;

    // Here we define the secret
    let secret = Secret {
        inner: "my_secret".to_string(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run_exchange(&session, secret, &mut input, &mut output)?;

    Ok(())
}
