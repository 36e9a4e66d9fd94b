// Interactive Menu for RSA Encryption/Decryption
// Terminal loop holding the session key pair and driving the file workflows

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::rsa::{generate_keypair, RsaKeyPair};
use crate::util::file_ops::{read_ciphertext, read_plaintext, write_ciphertext, write_plaintext};

// Session state: the current key pair, owned by the menu loop
struct MenuState {
    keypair: Option<RsaKeyPair>,
}

impl MenuState {
    fn new() -> Self {
        Self { keypair: None }
    }
}

/// Run the interactive menu until the user exits
pub fn run() -> Result<()> {
    let mut state = MenuState::new();

    loop {
        println!("\nRSA Encryption/Decryption Menu:");
        println!("1. Generate public-private keypair");
        println!("2. Encrypt a plaintext file");
        println!("3. Decrypt a ciphertext file");
        println!("4. Exit program");

        let option = prompt("\nChoose an option: ")?;

        let outcome = match option.as_str() {
            "1" => generate_keys(&mut state),
            "2" => encrypt_file(&state),
            "3" => decrypt_file(&state),
            "4" => {
                println!("\nExiting program.");
                return Ok(());
            }
            _ => {
                println!("\nInvalid option. Please try again.");
                Ok(())
            }
        };

        // An operation failure ends that operation, not the session
        if let Err(e) = outcome {
            eprintln!("\nError: {:#}", e);
        }
    }
}

fn generate_keys(state: &mut MenuState) -> Result<()> {
    let keypair = generate_keypair().context("key generation failed")?;

    println!(
        "\nPublic key: ({}, {})",
        keypair.public_key.e, keypair.public_key.n
    );
    println!(
        "Private key: ({}, {})",
        keypair.private_key.d, keypair.private_key.n
    );

    state.keypair = Some(keypair);
    Ok(())
}

fn encrypt_file(state: &MenuState) -> Result<()> {
    let Some(keypair) = &state.keypair else {
        println!("\nPublic key not generated. Please generate a public-private keypair first.");
        return Ok(());
    };

    let input_path = prompt_path("Enter the plaintext file path: ")?;
    let plaintext = read_plaintext(&input_path)
        .with_context(|| format!("could not read {}", input_path.display()))?;

    let ciphertext = keypair.public_key.encrypt(&plaintext)?;

    let output_path = prompt_path("Enter the encrypted file path to save: ")?;
    write_ciphertext(&output_path, &ciphertext)
        .with_context(|| format!("could not write {}", output_path.display()))?;

    println!("\nEncryption successful.");
    Ok(())
}

fn decrypt_file(state: &MenuState) -> Result<()> {
    let Some(keypair) = &state.keypair else {
        println!("\nPrivate key not generated. Please generate a public-private keypair first.");
        return Ok(());
    };

    let input_path = prompt_path("Enter the ciphertext file path: ")?;
    let ciphertext = read_ciphertext(&input_path)
        .with_context(|| format!("could not read {}", input_path.display()))?;

    let plaintext = keypair.private_key.decrypt(&ciphertext)?;

    let output_path = prompt_path("Enter the decrypted file path to save: ")?;
    write_plaintext(&output_path, &plaintext)
        .with_context(|| format!("could not write {}", output_path.display()))?;

    println!("\nDecryption successful.");
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("could not read from stdin")?;

    Ok(line.trim().to_string())
}

fn prompt_path(message: &str) -> Result<PathBuf> {
    Ok(PathBuf::from(prompt(message)?))
}
