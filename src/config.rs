/*!
 * Run configuration: which credentials profile to use and where to send
 * requests.
 */

use rusoto_core::Region;
use std::str::FromStr;

pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_REGION: &str = "eu-west-1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /** name of the profile in the shared credentials file */
    pub profile: String,
    /** region code, e.g. "eu-west-1" */
    pub region: String,
    /** alternate endpoint for S3-compatible stores */
    pub endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            profile: DEFAULT_PROFILE.to_string(),
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
        }
    }
}

impl Config {
    /**
     * Returns the region requests are signed for and sent to.  With an
     * endpoint configured, the region code is only used for signing and need
     * not be one AWS knows about.
     */
    pub fn region(&self) -> Result<Region, anyhow::Error> {
        match &self.endpoint {
            Some(endpoint) => Ok(Region::Custom {
                name: self.region.clone(),
                endpoint: endpoint.clone(),
            }),
            None => Region::from_str(&self.region)
                .map_err(|_| anyhow!("unknown region: {}", self.region)),
        }
    }
}
