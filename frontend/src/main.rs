//! Aether Events - Dioxus app.
//! Default: web (dx serve). Desktop: cargo run --features desktop.

#[cfg(feature = "desktop")]
fn main() -> anyhow::Result<()> {
    use aether_frontend::app::App;
    use anyhow::Context;

    aether_client_core::logging::init_logging();
    // No credential, no app: fail before any window opens.
    aether_client_core::GenerationConfig::from_env().context("configuring the generation client")?;
    tracing::info!("starting Aether Events desktop");
    dioxus::launch(App);
    Ok(())
}

#[cfg(all(feature = "web", not(feature = "desktop"), target_arch = "wasm32"))]
fn main() {
    dioxus::launch(aether_frontend::app::App);
}

#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    // A native `cargo run` of the web build hands over to the Dioxus CLI.
    // RUSTFLAGS is exported in the same shell because dx may not forward env
    // to its cargo child; reference-types must stay off for wasm-bindgen.
    let rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    let rustflags = if rustflags.is_empty() {
        "-C target-feature=-reference-types".to_string()
    } else {
        format!("{} -C target-feature=-reference-types", rustflags)
    };
    let status = std::process::Command::new("sh")
        .args(["-c", &format!("export RUSTFLAGS='{}'; exec dx serve", rustflags.replace('\'', "'\"'\"'"))])
        .status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            eprintln!("Then export API_KEY=<your Gemini key> before serving.");
            std::process::exit(1);
        }
    }
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn main() -> anyhow::Result<()> {
    anyhow::bail!("built without a UI platform; enable the `web` or `desktop` feature")
}
