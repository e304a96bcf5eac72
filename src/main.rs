use clap::{Parser, Subcommand};
use scytale::cli::{
    decrypt_text, encrypt_text, list_algorithms, run_request, show_matrix, TransformOptions,
};
use scytale::{Algorithm, CipherError, Operation};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("SCYTALE_VERSION");
const BUILD: &str = env!("SCYTALE_BUILD");
const PROFILE: &str = env!("SCYTALE_PROFILE");
const GIT_HASH: &str = env!("SCYTALE_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "scytale")]
#[command(author, about = "Classical text ciphers", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a classical cipher
    #[command(alias = "e")]
    Encrypt {
        /// caesar, vigenere, railfence, playfair or transposition
        #[arg(value_parser = parse_algorithm)]
        algorithm: Algorithm,

        /// Cipher key (shift, keyword, rail or column count)
        #[arg(long, short, required = true, allow_hyphen_values = true)]
        key: String,

        /// Text to encrypt (or use --input)
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Also write the result to a file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Decrypt text with a classical cipher
    #[command(alias = "d")]
    Decrypt {
        #[arg(value_parser = parse_algorithm)]
        algorithm: Algorithm,

        #[arg(long, short, required = true, allow_hyphen_values = true)]
        key: String,

        /// Text to decrypt (or use --input)
        text: Option<String>,

        #[arg(long, short)]
        input: Option<PathBuf>,

        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Remove Playfair filler letters from the result
        #[arg(long)]
        strip_filler: bool,
    },

    /// Show the Playfair key square for a keyword
    #[command(alias = "m")]
    Matrix {
        #[arg(long, short, required = true)]
        key: String,

        /// Print the square as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a JSON request body (file or stdin) and print the JSON response
    #[command(alias = "r")]
    Request {
        #[arg(value_parser = parse_algorithm)]
        algorithm: Algorithm,

        /// encrypt, decrypt or creatematrix
        #[arg(value_parser = parse_operation)]
        operation: Operation,

        /// Request body file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// List supported algorithms
    #[command(alias = "l")]
    List,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_operation(s: &str) -> Result<Operation, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn exit_code(err: &CipherError) -> ExitCode {
    if err.is_client_error() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("SCYTALE_LOG", "warn")).init();

    let cli = Cli::parse();

    if cli.version {
        println!("scytale {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            algorithm,
            key,
            text,
            input,
            output,
        } => TransformOptions::source_from(text, input).and_then(|source| {
            encrypt_text(&TransformOptions {
                algorithm,
                key,
                source,
                output,
                strip_filler: false,
            })
            .map(|text| text + "\n")
        }),

        Commands::Decrypt {
            algorithm,
            key,
            text,
            input,
            output,
            strip_filler,
        } => TransformOptions::source_from(text, input).and_then(|source| {
            decrypt_text(&TransformOptions {
                algorithm,
                key,
                source,
                output,
                strip_filler,
            })
            .map(|text| text + "\n")
        }),

        Commands::Matrix { key, json } => show_matrix(&key, json),

        Commands::Request {
            algorithm,
            operation,
            file,
        } => match run_request(algorithm, operation, file.as_deref()) {
            Ok(outcome) => {
                println!("{}", outcome.body);
                return match outcome.error {
                    Some(err) => exit_code(&err),
                    None => ExitCode::SUCCESS,
                };
            }
            Err(e) => Err(e),
        },

        Commands::List => Ok(list_algorithms()),
    };

    match result {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code(&e)
        }
    }
}
