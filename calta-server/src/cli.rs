use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use getopts::Options;

use crate::{error::ConfigError, source::Source};

pub struct Args {
    pub address: SocketAddr,
    pub source: Source,
    pub public_dir: PathBuf,
    pub tls: Option<TlsPaths>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

pub enum Invocation {
    Help(String),
    Serve(Args),
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: 127.0.0.1:8080, or 0.0.0.0:$PORT]",
        "SOCKET_ADDRESS",
    );
    opts.optopt(
        "s",
        "source",
        "URL or file path of the schedule CSV [Default: $CSV_URL]",
        "URL_OR_PATH",
    );
    opts.optopt(
        "p",
        "public",
        "Directory of static files to serve [Default: public]",
        "DIRECTORY",
    );
    opts.optopt(
        "c",
        "cert",
        "PEM certificate chain for HTTPS [Default: ./cert.pem if present]",
        "FILE",
    );
    opts.optopt(
        "k",
        "key",
        "PEM private key for HTTPS [Default: ./key.pem if present]",
        "FILE",
    );
    opts
}

/// Certificate and key in `dir`, when both files exist.
pub fn default_tls(dir: &Path) -> Option<TlsPaths> {
    let cert = dir.join("cert.pem");
    let key = dir.join("key.pem");

    (cert.is_file() && key.is_file()).then_some(TlsPaths { cert, key })
}

/// Resolves the server configuration from arguments, falling back to the
/// environment through `env`.
pub fn parse<I, F>(args: I, env: F) -> Result<Invocation, ConfigError>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let opts = opts();
    let matches = opts.parse(args)?;

    if matches.opt_present("help") {
        return Ok(Invocation::Help(
            opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))),
        ));
    }

    let address = match matches.opt_str("address") {
        Some(address) => address.parse().map_err(ConfigError::InvalidAddress)?,
        None => match env("PORT") {
            Some(port) => {
                let port = port.parse::<u16>().map_err(ConfigError::InvalidPort)?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
            None => SocketAddr::from(([127, 0, 0, 1], 8080)),
        },
    };

    let source = matches
        .opt_str("source")
        .or_else(|| env("CSV_URL"))
        .filter(|source| !source.is_empty())
        .map(Source::from)
        .ok_or(ConfigError::MissingSource)?;

    let public_dir = matches
        .opt_str("public")
        .map_or_else(|| PathBuf::from("public"), PathBuf::from);

    let tls = match (matches.opt_str("cert"), matches.opt_str("key")) {
        (Some(cert), Some(key)) => Some(TlsPaths {
            cert: cert.into(),
            key: key.into(),
        }),
        (None, None) => default_tls(Path::new(".")),
        _ => return Err(ConfigError::IncompleteTls),
    };

    Ok(Invocation::Serve(Args {
        address,
        source,
        public_dir,
        tls,
    }))
}
