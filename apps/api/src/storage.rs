//! Blob storage access: named-path uploads that return a publicly resolvable
//! URL, and idempotent deletion (a missing key is a no-op success).

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;

/// Uploads a binary payload under `folder` and returns its public URL.
/// Object keys carry a random component so re-uploads never collide.
pub async fn upload_object(
    s3: &S3Client,
    config: &Config,
    folder: &str,
    extension: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<String, AppError> {
    let key = format!("{folder}/{}.{extension}", Uuid::new_v4());
    s3.put_object()
        .bucket(&config.s3_bucket)
        .key(&key)
        .body(ByteStream::from(bytes))
        .content_type(content_type)
        .send()
        .await
        .map_err(|e| AppError::S3(format!("upload failed: {e}")))?;

    info!("Uploaded object to s3://{}/{}", config.s3_bucket, key);
    Ok(public_url(config, &key))
}

/// Deletes the object a previously returned URL points at. URLs from other
/// origins and already-deleted keys are ignored.
pub async fn delete_object_by_url(
    s3: &S3Client,
    config: &Config,
    url: &str,
) -> Result<(), AppError> {
    let Some(key) = key_from_url(config, url) else {
        return Ok(());
    };

    s3.delete_object()
        .bucket(&config.s3_bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| AppError::S3(format!("delete failed: {e}")))?;

    info!("Deleted object s3://{}/{}", config.s3_bucket, key);
    Ok(())
}

/// File extension for a sniffed image MIME type.
pub fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    }
}

fn public_url(config: &Config, key: &str) -> String {
    format!(
        "{}/{}/{}",
        config.s3_public_url.trim_end_matches('/'),
        config.s3_bucket,
        key
    )
}

fn key_from_url<'a>(config: &Config, url: &'a str) -> Option<&'a str> {
    let prefix = format!(
        "{}/{}/",
        config.s3_public_url.trim_end_matches('/'),
        config.s3_bucket
    );
    url.strip_prefix(&prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            database_url: String::new(),
            s3_bucket: "cv-assets".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            s3_public_url: "http://localhost:9000".to_string(),
            aws_access_key_id: String::new(),
            aws_secret_access_key: String::new(),
            anthropic_api_key: String::new(),
            jwt_secret: String::new(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_public_url_round_trips_to_key() {
        let config = test_config();
        let url = public_url(&config, "images/photos/abc.png");
        assert_eq!(url, "http://localhost:9000/cv-assets/images/photos/abc.png");
        assert_eq!(key_from_url(&config, &url), Some("images/photos/abc.png"));
    }

    #[test]
    fn test_foreign_url_yields_no_key() {
        let config = test_config();
        assert_eq!(
            key_from_url(&config, "https://elsewhere.example.com/cv-assets/x.png"),
            None
        );
    }

    #[test]
    fn test_extension_for_known_types() {
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("image/webp"), "webp");
        assert_eq!(extension_for("image/jpeg"), "jpg");
    }
}
