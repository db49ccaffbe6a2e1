use super::{oauth, Credentials, Publisher};
use crate::config;
use crate::error::{ArtbotError, Result};
use reqwest::blocking::{multipart, Client, Response};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct MediaUpload {
    media_id_string: String,
}

/// Posts images to Twitter on behalf of a single account.
pub struct TwitterPublisher {
    client: Client,
    credentials: Credentials,
    upload_url: String,
    post_url: String,
}

impl TwitterPublisher {
    pub fn new(client: Client, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
            upload_url: config::MEDIA_UPLOAD_URL.to_string(),
            post_url: config::CREATE_POST_URL.to_string(),
        }
    }

    /// Point the publisher at different media-upload and post endpoints.
    pub fn with_endpoints(mut self, upload_url: impl Into<String>, post_url: impl Into<String>) -> Self {
        self.upload_url = upload_url.into();
        self.post_url = post_url.into();
        self
    }

    /// Upload an image file, returning its media id.
    pub fn upload_media(&self, image: &Path) -> Result<String> {
        tracing::info!(image = %image.display(), "uploading media");
        let form = multipart::Form::new().file("media", image)?;
        let auth = oauth::authorization_header(&self.credentials, "POST", &self.upload_url, &[])?;
        let resp = self
            .client
            .post(&self.upload_url)
            .header(reqwest::header::AUTHORIZATION, auth)
            .multipart(form)
            .send()?;
        let upload: MediaUpload = check(&self.upload_url, resp)?.json()?;
        Ok(upload.media_id_string)
    }

    /// Create a post with `text` referencing an uploaded media id.
    pub fn create_post(&self, text: &str, media_id: &str) -> Result<()> {
        tracing::info!(media_id, "creating post");
        let auth = oauth::authorization_header(&self.credentials, "POST", &self.post_url, &[])?;
        let body = json!({
            "text": text,
            "media": { "media_ids": [media_id] },
        });
        let resp = self
            .client
            .post(&self.post_url)
            .header(reqwest::header::AUTHORIZATION, auth)
            .json(&body)
            .send()?;
        check(&self.post_url, resp)?;
        Ok(())
    }
}

impl Publisher for TwitterPublisher {
    fn publish_image_post(&self, image: &Path, caption: &str) -> Result<()> {
        let media_id = self.upload_media(image)?;
        self.create_post(caption, &media_id)
    }
}

/// Turn a non-success response into [`ArtbotError::Publish`].
fn check(url: &str, resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(ArtbotError::Publish(format!("{} returned {}: {}", url, status, body)))
}
