use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use jwk2pem::{
    pkcs8::LineEnding, Converter, Error, Jwk, KeyFormat, OutputEncoding, RsaPublicKey, Validation,
};
use tracing_subscriber::EnvFilter;

const STDIO: &str = "-";

/// Convert an RSA JSON Web Key into a PEM encoded public key.
#[derive(Debug, Parser)]
#[command(name = "jwk2pem", version, about)]
struct Cli {
    /// JWK or JWK Set to read, `-` for stdin
    #[arg(env = "JWK2PEM_INPUT", default_value = STDIO)]
    input: PathBuf,

    /// Where to write the public key, `-` for stdout
    #[arg(short, long, env = "JWK2PEM_OUTPUT", default_value = "sa.pub")]
    output: PathBuf,

    /// Key to pick from a JWK Set
    #[arg(long)]
    kid: Option<String>,

    /// Public key structure
    #[arg(long, value_enum, default_value_t = Format::Spki)]
    format: Format,

    /// Write raw DER instead of PEM
    #[arg(long)]
    der: bool,

    /// Use CRLF line endings in PEM output
    #[arg(long)]
    crlf: bool,

    /// Encode the key material without sanity checks
    #[arg(long)]
    no_validate: bool,

    /// Largest accepted modulus in bits
    #[arg(long, default_value_t = RsaPublicKey::MAX_SIZE)]
    max_bits: usize,

    /// More logging, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// SubjectPublicKeyInfo, `PUBLIC KEY`
    Spki,
    /// PKCS#1, `RSA PUBLIC KEY`
    Pkcs1,
}

impl From<Format> for KeyFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Spki => KeyFormat::Spki,
            Format::Pkcs1 => KeyFormat::Pkcs1,
        }
    }
}

impl Cli {
    fn converter(&self) -> Converter {
        Converter::new()
            .with_format(self.format.into())
            .with_encoding(if self.der {
                OutputEncoding::Der
            } else {
                OutputEncoding::Pem
            })
            .with_line_ending(if self.crlf {
                LineEnding::CRLF
            } else {
                LineEnding::LF
            })
            .with_validation(if self.no_validate {
                Validation::Permissive
            } else {
                Validation::Strict
            })
            .with_max_size(self.max_bits)
    }

    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

fn read_input(path: &Path) -> jwk2pem::Result<String> {
    if is_stdio(path) {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .map_err(|source| Error::Read { path: None, source })?;
        Ok(json)
    } else {
        fs::read_to_string(path).map_err(|source| Error::Read {
            path: Some(path.to_path_buf()),
            source,
        })
    }
}

fn run(cli: &Cli) -> jwk2pem::Result<()> {
    let json = read_input(&cli.input)?;
    let jwk = Jwk::from_document(&json, cli.kid.as_deref())?;
    let converter = cli.converter();

    if is_stdio(&cli.output) {
        converter.write_to(&jwk, io::stdout().lock())?;
    } else {
        converter.write_file(&jwk, &cli.output)?;
        tracing::info!("{} created", cli.output.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
