/*!
 * Command-line arguments and the top-level run.
 */

use crate::cat::cat_uris;
use crate::config::Config;
use crate::config::DEFAULT_PROFILE;
use crate::config::DEFAULT_REGION;
use crate::session::new_client;
use clap::CommandFactory;
use clap::Parser;
use std::ffi::OsString;
use tokio::io::AsyncWrite;

/*
 * Long flags that may also be spelled with a single dash ("-profile NAME"),
 * the way Go's flag package accepts them.
 */
const SINGLE_DASH_FLAGS: &[&str] = &["profile", "region", "endpoint", "help"];

#[derive(Parser, Debug)]
#[command(
    name = "s3cat",
    about = "Write the contents of S3 objects to stdout",
    override_usage = "s3cat [-profile NAME] [-region CODE] S3_URI..."
)]
pub struct Args {
    /** Profile to use from the shared credentials file */
    #[arg(long, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /** Region the objects live in */
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /** Send requests to this endpoint instead of AWS */
    #[arg(long)]
    pub endpoint: Option<String>,

    /** Objects to print, as s3://BUCKET/KEY */
    #[arg(value_name = "S3_URI")]
    pub uris: Vec<String>,
}

impl Args {
    /**
     * Parses `argv` (including the program name), accepting single-dash
     * spellings of the long flags.
     */
    pub fn try_parse_argv<I, T>(argv: I) -> Result<Args, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Args::try_parse_from(normalize_flags(argv))
    }

    pub fn config(&self) -> Config {
        Config {
            profile: self.profile.clone(),
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

/** Returns the full usage text. */
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/*
 * Rewrites "-profile" and "-profile=NAME" as "--profile" and
 * "--profile=NAME".  Everything after a bare "--" is left alone.
 */
fn normalize_flags<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_flags = false;
    argv.into_iter()
        .map(|arg| {
            let arg = arg.into();
            if past_flags {
                return arg;
            }
            let text = match arg.to_str() {
                Some(text) => text,
                None => return arg,
            };
            if text == "--" {
                past_flags = true;
                return arg;
            }
            let name = match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    rest.split('=').next().unwrap_or(rest)
                }
                _ => return arg,
            };
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

/**
 * Runs s3cat for already-parsed arguments: builds one client for the whole
 * run, then prints each object in turn to `out`.
 */
pub async fn run<W>(args: &Args, out: &mut W) -> Result<(), anyhow::Error>
where
    W: AsyncWrite + Unpin,
{
    if args.uris.is_empty() {
        bail!("no S3 URIs given");
    }

    let s3 = new_client(&args.config())?;
    cat_uris(&s3, &args.uris, out).await
}
