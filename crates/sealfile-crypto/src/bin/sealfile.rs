//! sealfile: Command-line tool for hybrid file encryption.
//!
//! Files can be encrypted with a shared passphrase (AES-256-CBC with an
//! Argon2id-derived key) or for a recipient's RSA public key, in which case
//! a one-shot passphrase is generated and wrapped with RSA-OAEP.

use clap::{Parser, Subcommand};
use sealfile_crypto::{
    base64_decode, base64_encode, decrypt_hybrid, decrypt_symmetric, encrypt_hybrid,
    encrypt_symmetric, KeyPair,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sealfile")]
#[command(author, version, about = "Hybrid file encryption")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new 4096-bit RSA keypair
    Keygen {
        /// Output directory for keys (default: current directory)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Encrypt a file
    Encrypt {
        /// Input file to encrypt
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the ciphertext blob
        #[arg(short, long)]
        output: PathBuf,

        /// Shared passphrase (passphrase mode)
        #[arg(short, long, conflicts_with = "recipient")]
        passphrase: Option<String>,

        /// Recipient public key file (hybrid mode)
        #[arg(short, long, conflicts_with = "passphrase")]
        recipient: Option<PathBuf>,

        /// Output file for the wrapped key (hybrid mode, default: <output>.key)
        #[arg(short, long)]
        wrapped_key: Option<PathBuf>,
    },

    /// Decrypt a file
    Decrypt {
        /// Input ciphertext blob
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for decrypted data
        #[arg(short, long)]
        output: PathBuf,

        /// Shared passphrase (passphrase mode)
        #[arg(short, long, conflicts_with = "key")]
        passphrase: Option<String>,

        /// Path to your private key file (hybrid mode)
        #[arg(short, long, conflicts_with = "passphrase")]
        key: Option<PathBuf>,

        /// Wrapped key file (hybrid mode, default: <input>.key)
        #[arg(short, long)]
        wrapped_key: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Keygen { output } => {
            cmd_keygen(&output)?;
        }
        Commands::Encrypt {
            input,
            output,
            passphrase,
            recipient,
            wrapped_key,
        } => match (passphrase, recipient) {
            (Some(passphrase), None) => {
                cmd_encrypt_passphrase(&input, &output, &passphrase)?;
            }
            (None, Some(recipient)) => {
                let wrapped_key_path =
                    wrapped_key.unwrap_or_else(|| sibling_key_path(&output));
                cmd_encrypt_hybrid(&input, &output, &wrapped_key_path, &recipient)?;
            }
            _ => return Err("Specify either --passphrase or --recipient".into()),
        },
        Commands::Decrypt {
            input,
            output,
            passphrase,
            key,
            wrapped_key,
        } => match (passphrase, key) {
            (Some(passphrase), None) => {
                cmd_decrypt_passphrase(&input, &output, &passphrase)?;
            }
            (None, Some(key)) => {
                let wrapped_key_path = wrapped_key.unwrap_or_else(|| sibling_key_path(&input));
                cmd_decrypt_hybrid(&input, &output, &wrapped_key_path, &key)?;
            }
            _ => return Err("Specify either --passphrase or --key".into()),
        },
    }

    Ok(())
}

fn sibling_key_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".key");
    PathBuf::from(name)
}

fn cmd_keygen(output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let keypair = KeyPair::generate()?;

    std::fs::create_dir_all(output_dir)?;
    let public_path = output_dir.join("public.pem");
    let private_path = output_dir.join("private.pem");

    std::fs::write(&public_path, &keypair.public_key_pem)?;
    std::fs::write(&private_path, &keypair.private_key_pem)?;

    let output = serde_json::json!({
        "public_key_path": public_path.to_string_lossy(),
        "private_key_path": private_path.to_string_lossy(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn cmd_encrypt_passphrase(
    input_path: &Path,
    output_path: &Path,
    passphrase: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let plaintext = std::fs::read(input_path)?;

    let blob = encrypt_symmetric(&base64_encode(&plaintext), passphrase)?;
    std::fs::write(output_path, &blob)?;

    let output = serde_json::json!({
        "mode": "passphrase",
        "input": input_path.to_string_lossy(),
        "output": output_path.to_string_lossy(),
        "input_size": plaintext.len(),
        "output_size": blob.len(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn cmd_encrypt_hybrid(
    input_path: &Path,
    output_path: &Path,
    wrapped_key_path: &Path,
    recipient_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let public_key_pem = std::fs::read_to_string(recipient_path)?;
    let plaintext = std::fs::read(input_path)?;

    let artifacts = encrypt_hybrid(&plaintext, &public_key_pem)?;

    std::fs::write(output_path, &artifacts.body_ciphertext)?;
    std::fs::write(wrapped_key_path, &artifacts.wrapped_key)?;

    let output = serde_json::json!({
        "mode": "hybrid",
        "input": input_path.to_string_lossy(),
        "output": output_path.to_string_lossy(),
        "wrapped_key": wrapped_key_path.to_string_lossy(),
        "input_size": plaintext.len(),
        "output_size": artifacts.body_ciphertext.len(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn cmd_decrypt_passphrase(
    input_path: &Path,
    output_path: &Path,
    passphrase: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let blob = std::fs::read_to_string(input_path)?;

    let payload_b64 = decrypt_symmetric(blob.trim(), passphrase)?;
    let plaintext = base64_decode(&payload_b64)?;
    std::fs::write(output_path, &plaintext)?;

    let output = serde_json::json!({
        "mode": "passphrase",
        "input": input_path.to_string_lossy(),
        "output": output_path.to_string_lossy(),
        "output_size": plaintext.len(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn cmd_decrypt_hybrid(
    input_path: &Path,
    output_path: &Path,
    wrapped_key_path: &Path,
    key_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let private_key_pem = std::fs::read_to_string(key_path)?;
    let body = std::fs::read_to_string(input_path)?;
    let wrapped_key = std::fs::read_to_string(wrapped_key_path)?;

    let plaintext = decrypt_hybrid(body.trim(), wrapped_key.trim(), &private_key_pem)?;
    std::fs::write(output_path, &plaintext)?;

    let output = serde_json::json!({
        "mode": "hybrid",
        "input": input_path.to_string_lossy(),
        "output": output_path.to_string_lossy(),
        "output_size": plaintext.len(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
