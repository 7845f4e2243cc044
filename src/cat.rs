/*!
 * Fetching objects and copying their contents to an output stream.
 */

use crate::uri::ObjectUri;
use anyhow::Context;
use rusoto_s3::GetObjectRequest;
use rusoto_s3::S3Client;
use rusoto_s3::S3;
use std::io;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;

/** Size of each read from an object body. */
pub const CHUNK_SIZE: usize = 4096;

/**
 * Writes the contents of each object named in `s3uris` to `out`, in order.
 * Stops at the first URI that fails to parse, fetch, or copy; later URIs are
 * not attempted.  `out` is flushed before returning either way, so output
 * from the objects before a failure is complete.
 */
pub async fn cat_uris<W>(
    s3: &S3Client,
    s3uris: &[String],
    out: &mut W,
) -> Result<(), anyhow::Error>
where
    W: AsyncWrite + Unpin,
{
    let mut result = Ok(());
    for s3uri in s3uris {
        if let Err(error) = cat_uri(s3, s3uri, out).await {
            result = Err(error);
            break;
        }
    }
    let flushed = out.flush().await.with_context(|| "flushing output");
    result.and(flushed)
}

pub async fn cat_uri<W>(
    s3: &S3Client,
    s3uri: &str,
    out: &mut W,
) -> Result<u64, anyhow::Error>
where
    W: AsyncWrite + Unpin,
{
    let uri = ObjectUri::parse(s3uri)?;
    cat_object(s3, &uri, out).await
}

/**
 * Issues a single GET for the object and copies its body to `out`.
 * Returns the number of bytes written.
 */
pub async fn cat_object<W>(
    s3: &S3Client,
    uri: &ObjectUri,
    out: &mut W,
) -> Result<u64, anyhow::Error>
where
    W: AsyncWrite + Unpin,
{
    let key = uri.object_key();
    if key.is_empty() {
        bail!("missing object key in {}", uri);
    }

    debug!("fetching bucket {:?} key {:?}", uri.bucket, key);
    let object_output = s3
        .get_object(GetObjectRequest {
            bucket: uri.bucket.clone(),
            key: key.to_string(),
            ..Default::default()
        })
        .await
        .with_context(|| format!("fetching {}", uri))?;

    let body = object_output
        .body
        .ok_or_else(|| anyhow!("object missing body: {}", uri))?;
    let nbytes = copy_stream(body.into_async_read(), out)
        .await
        .with_context(|| format!("copying {} to output", uri))?;
    debug!("copied {} bytes from {}", nbytes, uri);
    Ok(nbytes)
}

/**
 * Copies `body` to `out` one chunk at a time until end-of-stream.  `body` is
 * consumed, so it is released on return whether or not the copy succeeded.
 * Both read and write errors are returned.
 */
pub async fn copy_stream<R, W>(mut body: R, out: &mut W) -> io::Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total: u64 = 0;
    loop {
        let length = match body.read(&mut buf).await {
            Ok(0) => return Ok(total),
            Ok(length) => length,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {
                continue
            }
            Err(error) => return Err(error),
        };
        out.write_all(&buf[..length]).await?;
        total += length as u64;
    }
}
