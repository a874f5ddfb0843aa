//! Host provisioning with confirmation. Run with: cargo run -p qav-dialoguer --example provision
//!
//! Set `RUST_LOG=debug` to see rejected answers logged on stderr.

use example_questions::host_provisioning;
use qav_dialoguer::DialoguerConsole;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let user = std::env::var("USER").unwrap_or_default();
    let mut questions = host_provisioning();
    let mut console = DialoguerConsole::new();

    let extras = [("Requested by", user.as_str())];
    match questions.ask_and_confirm(&mut console, &extras, true)? {
        Some(answers) => {
            let mut keys: Vec<_> = answers.iter().collect();
            keys.sort_by_key(|(key, _)| *key);
            for (key, value) in keys {
                println!("{key} = {value}");
            }
        }
        None => println!("Aborted."),
    }
    Ok(())
}
