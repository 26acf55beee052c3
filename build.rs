//! Build script for the music advisor.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory, next to where the application looks for its `.env`:
//!
//! - Linux: `~/.local/share/musicadvisor/.env.example`
//! - macOS: `~/Library/Application Support/musicadvisor/.env.example`
//! - Windows: `%LOCALAPPDATA%/musicadvisor/.env.example`
//!
//! A missing template or an unwritable data directory only produces a
//! cargo warning.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("musicadvisor");

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        let copied = fs::create_dir_all(&out_dir)
            .and_then(|()| fs::write(out_dir.join(".env.example"), contents));
        if let Err(e) = copied {
            println!("cargo:warning=could not copy .env.example to {}: {e}", out_dir.display());
        }
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
