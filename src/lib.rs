/*!
 * s3cat: write the contents of S3 objects to an output stream, the way cat(1)
 * does for files.
 *
 * A run parses its `s3://BUCKET/KEY` arguments one at a time, fetches each
 * object with a single GET and streams the body out in fixed-size chunks.
 * The first failure ends the run.
 */

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub mod cat;
pub mod cli;
pub mod config;
pub mod session;
pub mod uri;

pub use cat::cat_uris;
pub use config::Config;
pub use session::new_client;
pub use uri::ObjectUri;
