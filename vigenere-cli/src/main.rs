#![deny(missing_docs)]
//! A command-line interface for the multi-script Vigenère cipher.

use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use vigenere_core::accounts::validate_username;
use vigenere_core::{AlphabetConfig, AlphabetTable, Cipher, generate_key, validate::validate};

mod metadata;

use metadata::CiphertextMetadata;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt a short text\nvigenere-cli encrypt \"HELLO WORLD\" --key KEY\n\n# Encrypt a file and write a metadata sidecar\nvigenere-cli encrypt --input ./note.txt --output ./note.enc --key KEY\n\n# Decrypt, checking the sidecar first\nvigenere-cli decrypt --input ./note.enc --output ./note.txt --key KEY --metadata ./note.enc.metadata.json\n\n# Use a custom alphabet\nvigenere-cli --alphabet ./latin.json encrypt \"ATTACK AT DAWN\" --key LEMON"
)]
struct Cli {
    /// Path to a JSON alphabet configuration. The built-in alphabet is used if omitted.
    #[arg(long, global = true, value_name = "CONFIG_FILE")]
    alphabet: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a key
    Encrypt {
        #[command(flatten)]
        source: Source,

        /// The key. Every character must belong to the alphabet.
        #[arg(short, long, allow_hyphen_values = true)]
        key: String,

        /// File to write the ciphertext to. A metadata file is written next to it. Prints to stdout if omitted.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt text with a key
    Decrypt {
        #[command(flatten)]
        source: Source,

        /// The key used for encryption.
        #[arg(short, long, allow_hyphen_values = true)]
        key: String,

        /// File to write the plaintext to. Prints to stdout if omitted.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,

        /// Path to the ciphertext metadata file. The ciphertext is checked against it before decrypting.
        #[arg(long, value_name = "METADATA_FILE")]
        metadata: Option<PathBuf>,
    },
    /// Check that every character of a text belongs to the alphabet
    Validate {
        #[command(flatten)]
        source: Source,
    },
    /// Generate a random key from the alphabet
    Keygen {
        /// The number of characters in the key
        #[arg(short, long, default_value_t = 16)]
        length: usize,
    },
    /// Inspect the active alphabet
    Alphabet {
        #[command(subcommand)]
        command: AlphabetCommands,
    },
    /// Check account usernames
    Username {
        #[command(subcommand)]
        command: UsernameCommands,
    },
}

#[derive(Subcommand)]
enum AlphabetCommands {
    /// Show the symbols and identity of the active alphabet
    Show,
    /// Write the active alphabet configuration as JSON
    Export {
        /// Path of the configuration file to write
        #[arg(short, long, value_name = "CONFIG_FILE")]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
enum UsernameCommands {
    /// Check that a username only uses letters, digits and underscores
    Check {
        /// The username to check
        name: String,
    },
}

/// Where the text to process comes from.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// The text to process
    #[arg(allow_hyphen_values = true)]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,
}

impl Source {
    fn read(&self) -> String {
        match (&self.text, &self.input) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => fs::read_to_string(path).unwrap_or_else(|e| {
                error!("Failed to read input file '{}': {e}", path.display());
                std::process::exit(1);
            }),
            (None, None) => {
                error!("Either a text argument or --input is required.");
                std::process::exit(1);
            }
        }
    }

    fn describe(&self) -> String {
        self.input
            .as_ref()
            .map_or_else(|| "text argument".to_string(), |p| format!("'{}'", p.display()))
    }
}

fn load_config(path: Option<&Path>) -> AlphabetConfig {
    path.map_or_else(AlphabetConfig::standard, |path| {
        AlphabetConfig::load(path).unwrap_or_else(|e| {
            error!("Failed to load alphabet configuration: {e}");
            std::process::exit(1);
        })
    })
}

fn write_output(path: &Path, content: &str) {
    if let Err(e) = fs::write(path, content) {
        error!("Failed to write output file '{}': {e}", path.display());
        std::process::exit(1);
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(cli.alphabet.as_deref());
    let table: AlphabetTable = config.build().unwrap_or_else(|e| {
        error!("Invalid alphabet configuration: {e}");
        std::process::exit(1);
    });
    let cipher = Cipher::new(&table);

    match &cli.command {
        Commands::Encrypt {
            source,
            key,
            output,
        } => {
            let message = source.read();
            info!(
                "Encrypting {} character(s) from {} with alphabet '{}'.",
                message.chars().count(),
                source.describe(),
                table.name()
            );
            let ciphertext = cipher.encrypt(&message, key).unwrap_or_else(|e| {
                error!("Encryption failed: {e}");
                std::process::exit(1);
            });

            match output {
                Some(output) => {
                    write_output(output, &ciphertext);
                    let metadata_path = CiphertextMetadata::path_for(output);
                    let metadata = CiphertextMetadata::describe(&table, &ciphertext);
                    if let Err(e) = metadata.write(&metadata_path) {
                        error!("Failed to write metadata file: {e}");
                        std::process::exit(1);
                    }
                    println!(
                        "Successfully encrypted {} to '{}'",
                        source.describe(),
                        output.display()
                    );
                    println!("Decryption metadata saved to '{}'", metadata_path.display());
                }
                None => println!("{ciphertext}"),
            }
        }
        Commands::Decrypt {
            source,
            key,
            output,
            metadata,
        } => {
            let ciphertext = source.read();

            if let Some(meta_path) = metadata {
                let meta = CiphertextMetadata::read(meta_path).unwrap_or_else(|e| {
                    error!("Failed to read metadata file: {e}");
                    std::process::exit(1);
                });
                if let Err(reason) = meta.verify(&table, &ciphertext) {
                    error!("{reason} Aborting.");
                    std::process::exit(1);
                }
                info!("Ciphertext matches metadata '{}'.", meta_path.display());
            }

            let plaintext = cipher.decrypt(&ciphertext, key).unwrap_or_else(|e| {
                error!("Decryption failed: {e}");
                std::process::exit(1);
            });

            match output {
                Some(output) => {
                    write_output(output, &plaintext);
                    println!(
                        "Successfully decrypted {} to '{}'",
                        source.describe(),
                        output.display()
                    );
                }
                None => println!("{plaintext}"),
            }
        }
        Commands::Validate { source } => {
            let text = source.read();
            match validate(&table, &text) {
                Ok(()) => println!("OK"),
                Err(e) => {
                    error!("Validation failed for {}: {e}", source.describe());
                    std::process::exit(1);
                }
            }
        }
        Commands::Keygen { length } => {
            let key = generate_key(&table, *length).unwrap_or_else(|e| {
                error!("Failed to generate key: {e}");
                std::process::exit(1);
            });
            println!("{key}");
        }
        Commands::Alphabet { command } => match command {
            AlphabetCommands::Show => {
                println!("Alphabet: {}", table.name());
                println!("{:-<40}", "");
                println!("Symbols: {}", table.len());
                println!("Shift ring: {}", cipher.ring_len());
                println!(
                    "Pass-through: {}",
                    table
                        .passthrough()
                        .iter()
                        .map(|c| format!("{c:?}"))
                        .collect::<Vec<_>>()
                        .join(" ")
                );
                println!("Fingerprint: {}", table.fingerprint());
                println!();
                println!("{}", table.as_string().escape_debug());
            }
            AlphabetCommands::Export { output } => {
                if let Err(e) = config.save(output) {
                    error!("Failed to export alphabet configuration: {e}");
                    std::process::exit(1);
                }
                println!(
                    "Alphabet '{}' exported to '{}'",
                    config.name,
                    output.display()
                );
            }
        },
        Commands::Username { command } => match command {
            UsernameCommands::Check { name } => match validate_username(name) {
                Ok(()) => println!("valid"),
                Err(e) => {
                    error!("{e}");
                    std::process::exit(1);
                }
            },
        },
    }
}
