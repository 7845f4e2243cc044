/*!
 * Parsing of `s3://BUCKET/KEY` URIs.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/*
 * Group 1 is the bucket.  Group 2 is everything after it, used verbatim as
 * the key, so "s3://bucket/dir/file" yields the key "/dir/file".
 */
static S3_URI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^s3://([^/]+)(.*)$").expect("S3 URI pattern is valid")
});

const BUCKET_GROUP: usize = 1;
const KEY_GROUP: usize = 2;

/**
 * Identifies one object: the bucket and the raw key suffix from the URI.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectUri {
    pub bucket: String,
    pub key: String,
}

impl ObjectUri {
    pub fn parse(s3uri: &str) -> Result<ObjectUri, anyhow::Error> {
        let groups = S3_URI_PATTERN
            .captures(s3uri)
            .ok_or_else(|| anyhow!("invalid s3 uri: {}", s3uri))?;
        let bucket = groups[BUCKET_GROUP].to_string();
        let key = groups[KEY_GROUP].to_string();
        Ok(ObjectUri { bucket, key })
    }

    /**
     * Returns the key as S3 addresses it, relative to the bucket: the
     * separator between bucket and key is not part of the object name.
     */
    pub fn object_key(&self) -> &str {
        self.key.strip_prefix('/').unwrap_or(&self.key)
    }
}

impl FromStr for ObjectUri {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectUri::parse(s)
    }
}

impl fmt::Display for ObjectUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}{}", self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::ObjectUri;

    #[test]
    fn test_parse_bucket_and_key() {
        let uri = ObjectUri::parse("s3://test-bucket/filename").unwrap();
        assert_eq!(uri.bucket, "test-bucket");
        assert_eq!(uri.key, "/filename");
        assert_eq!(uri.object_key(), "filename");
    }

    #[test]
    fn test_key_is_raw_suffix() {
        let uri = ObjectUri::parse("s3://b/dir/sub/file.txt").unwrap();
        assert_eq!(uri.bucket, "b");
        assert_eq!(uri.key, "/dir/sub/file.txt");
        assert_eq!(uri.object_key(), "dir/sub/file.txt");

        /* Only the bucket separator is dropped from the object key. */
        let uri = ObjectUri::parse("s3://b//leading").unwrap();
        assert_eq!(uri.key, "//leading");
        assert_eq!(uri.object_key(), "/leading");

        let uri = ObjectUri::parse("s3://b/trailing/").unwrap();
        assert_eq!(uri.key, "/trailing/");
    }

    #[test]
    fn test_bucket_only() {
        let uri = ObjectUri::parse("s3://bucket").unwrap();
        assert_eq!(uri.bucket, "bucket");
        assert_eq!(uri.key, "");
        assert_eq!(uri.object_key(), "");

        let uri = ObjectUri::parse("s3://bucket/").unwrap();
        assert_eq!(uri.key, "/");
        assert_eq!(uri.object_key(), "");
    }

    #[test]
    fn test_invalid() {
        for bad in &[
            "",
            "test-bucket/filename",
            "/test-bucket/filename",
            "gs://test-bucket/filename",
            "s3:/test-bucket/filename",
            "xs3://test-bucket/filename",
            "s3://",
            "s3:///filename",
        ] {
            let error = ObjectUri::parse(bad).unwrap_err();
            assert_eq!(error.to_string(), format!("invalid s3 uri: {}", bad));
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let uri: ObjectUri = "s3://bucket/a b/c\nd".parse().unwrap();
        assert_eq!(uri.key, "/a b/c\nd");
        assert_eq!(uri.to_string(), "s3://bucket/a b/c\nd");
    }
}
