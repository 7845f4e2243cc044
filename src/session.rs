/*!
 * Construction of the S3 client shared by every fetch in a run.
 */

use crate::config::Config;
use anyhow::Context;
use rusoto_core::HttpClient;
use rusoto_credential::ProfileProvider;
use rusoto_s3::S3Client;

/**
 * Builds an S3 client that signs requests with credentials from the
 * configured profile.  Credentials themselves are only read on the first
 * request, so a missing or broken profile shows up as a fetch error.
 */
pub fn new_client(config: &Config) -> Result<S3Client, anyhow::Error> {
    let region = config.region()?;
    let mut provider = ProfileProvider::new()
        .with_context(|| "locating shared credentials file")?;
    provider.set_profile(config.profile.clone());
    let http_client =
        HttpClient::new().with_context(|| "creating HTTP client")?;

    debug!(
        "s3 client: profile {:?}, region {:?}, endpoint {:?}",
        config.profile,
        region.name(),
        config.endpoint
    );
    Ok(S3Client::new_with(http_client, provider, region))
}
