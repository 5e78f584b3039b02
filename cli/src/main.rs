//! ccx-walletutil: address, key and report utilities over the wallet core.

use anyhow::Context;
use ccx_crypto::{encode_address, generate_keypair, validate_address};
use ccx_types::{AddressKeys, CurrencyParams, PublicKey, SecretKey, TransferRecord};
use ccx_utils::LogFormat;
use ccx_wallet_core::{
    ensure_keys_match, order_report, parse_order, transfer_report, validate_orders,
};
use clap::Parser;
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(
    name = "ccx-walletutil",
    about = "Validate addresses and keys, render transfer and order reports"
)]
struct Cli {
    /// Path to a TOML currency configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "CCX_CONFIG")]
    config: Option<PathBuf>,

    /// Network address prefix, decimal or `0x`-prefixed hex.
    #[arg(long, env = "CCX_ADDRESS_PREFIX", value_parser = parse_prefix)]
    address_prefix: Option<u64>,

    /// Digits after the decimal point when rendering amounts.
    #[arg(long, env = "CCX_DECIMAL_PLACES")]
    decimal_places: Option<u8>,

    /// Currency symbol appended to amounts.
    #[arg(long, env = "CCX_SYMBOL")]
    symbol: Option<String>,

    /// Thousands separator for amounts.
    #[arg(long, env = "CCX_GROUPING")]
    grouping: Option<char>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "warn", env = "CCX_LOG_LEVEL")]
    log_level: String,

    /// Emit logs as newline-delimited JSON.
    #[arg(long, env = "CCX_LOG_JSON")]
    log_json: bool,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Validate an address and print its public keys.
    ValidateAddress { address: String },

    /// Check that a secret key produces the given public key.
    CheckKeys {
        /// Secret key, 64 hex characters. Prefer `CCX_SECRET_KEY` or
        /// `--secret-stdin`: a flag value lands in shell history and `ps`.
        #[arg(long, env = "CCX_SECRET_KEY", hide_env_values = true)]
        secret: Option<String>,
        /// Read the secret key from the first line of stdin.
        #[arg(long)]
        secret_stdin: bool,
        /// Expected public key, 64 hex characters.
        #[arg(long)]
        public: String,
    },

    /// Generate spend and view keys and print the resulting address.
    NewAddress,

    /// Render a JSON array of transfer records.
    Transfers { file: PathBuf },

    /// Validate and render a JSON array of `{address, amount}` orders.
    Orders { file: PathBuf },
}

/// Order as written by a user: the amount is a decimal string.
#[derive(Deserialize)]
struct OrderInput {
    address: String,
    amount: String,
}

fn parse_prefix(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex_digits) => u64::from_str_radix(hex_digits, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address prefix {s:?}: {e}"))
}

fn load_currency(cli: &Cli) -> anyhow::Result<CurrencyParams> {
    let mut currency = match &cli.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            let parsed: CurrencyParams = toml::from_str(&contents)
                .with_context(|| format!("failed to parse config file {}", path.display()))?;
            tracing::info!("Loaded currency config from {}", path.display());
            parsed
        }
        None => CurrencyParams::default(),
    };

    if let Some(prefix) = cli.address_prefix {
        currency.address_prefix = prefix;
    }
    if let Some(places) = cli.decimal_places {
        currency.amount.decimal_places = places;
    }
    if let Some(ref symbol) = cli.symbol {
        currency.amount.symbol = symbol.clone();
    }
    if cli.grouping.is_some() {
        currency.amount.grouping = cli.grouping;
    }
    Ok(currency)
}

fn parse_key_hex(text: &str, out: &mut [u8; 32], what: &str) -> anyhow::Result<()> {
    hex::decode_to_slice(text.trim(), out)
        .with_context(|| format!("{what} must be 64 hex characters"))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

/// Resolve the secret key from stdin when asked, else from the flag or env.
fn read_secret(
    secret: Option<&str>,
    from_stdin: bool,
    input: &mut dyn BufRead,
) -> anyhow::Result<SecretKey> {
    let mut key = SecretKey([0u8; 32]);
    if from_stdin {
        let mut line = Zeroizing::new(String::new());
        input
            .read_line(&mut line)
            .context("failed to read secret key from stdin")?;
        parse_key_hex(&line, &mut key.0, "secret key")?;
    } else {
        let text = secret.context(
            "no secret key given: use --secret-stdin, set CCX_SECRET_KEY, or pass --secret",
        )?;
        parse_key_hex(text, &mut key.0, "secret key")?;
    }
    Ok(key)
}

fn run(cli: &Cli, input: &mut dyn BufRead, out: &mut dyn Write) -> anyhow::Result<()> {
    let currency = load_currency(cli)?;
    tracing::debug!(
        prefix = currency.address_prefix,
        decimal_places = currency.amount.decimal_places,
        "currency parameters resolved"
    );

    match &cli.command {
        Command::ValidateAddress { address } => {
            let keys = validate_address(address, &currency)
                .with_context(|| format!("invalid address {address:?}"))?;
            writeln!(out, "spend public key: {}", hex::encode(keys.spend.as_bytes()))?;
            writeln!(out, "view public key:  {}", hex::encode(keys.view.as_bytes()))?;
        }
        Command::CheckKeys {
            secret,
            secret_stdin,
            public,
        } => {
            let secret_key = read_secret(secret.as_deref(), *secret_stdin, input)?;
            let mut public_key = PublicKey([0u8; 32]);
            parse_key_hex(public, &mut public_key.0, "public key")?;
            ensure_keys_match(&secret_key, &public_key, "")?;
            writeln!(out, "keys match")?;
        }
        Command::NewAddress => {
            let spend = generate_keypair();
            let view = generate_keypair();
            let keys = AddressKeys {
                spend: spend.public,
                view: view.public,
            };
            writeln!(out, "address:           {}", encode_address(currency.address_prefix, &keys))?;
            writeln!(out, "spend public key:  {}", hex::encode(spend.public.as_bytes()))?;
            writeln!(out, "spend secret key:  {}", hex::encode(spend.secret.as_bytes()))?;
            writeln!(out, "view public key:   {}", hex::encode(view.public.as_bytes()))?;
            writeln!(out, "view secret key:   {}", hex::encode(view.secret.as_bytes()))?;
        }
        Command::Transfers { file } => {
            let records: Vec<TransferRecord> = read_json(file)?;
            write!(out, "{}", transfer_report(&currency.amount, &records))?;
        }
        Command::Orders { file } => {
            let inputs: Vec<OrderInput> = read_json(file)?;
            let orders = inputs
                .into_iter()
                .enumerate()
                .map(|(i, input)| {
                    parse_order(input.address, &input.amount, &currency)
                        .with_context(|| format!("order {i}: bad amount {:?}", input.amount))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            validate_orders(&orders, &currency)?;
            write!(out, "{}", order_report(&currency.amount, &orders))?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Human
    };
    ccx_utils::init_tracing(format, &cli.log_level);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut input, &mut out)
}
