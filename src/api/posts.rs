//! Post operations
//!
//! Media URL lists on returned posts are rewritten to absolute URLs after
//! every fetch. `list_posts` is a feed operation: it never fails, a broken
//! backend yields an empty list.

use reqwest::multipart::Form;

use crate::error::Result;
use crate::http_client::{or_empty_feed, ApiClient};
use crate::media::resolve_media_url;
use crate::models::{MediaUpload, Post};

fn resolve_post_media(files_base: &str, mut post: Post) -> Post {
    if let Some(urls) = post.media_urls.take() {
        post.media_urls = Some(
            urls.iter()
                .filter_map(|url| resolve_media_url(files_base, Some(url)))
                .collect(),
        );
    }
    post
}

impl ApiClient {
    /// Feed operation: resolves to an empty list on failure
    pub async fn list_posts(&self) -> Vec<Post> {
        or_empty_feed(self.fetch_posts().await, "posts")
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let posts: Vec<Post> = self.get_json("/posts").await?;
        Ok(posts
            .into_iter()
            .map(|post| resolve_post_media(self.files_base(), post))
            .collect())
    }

    pub async fn get_post(&self, id: i64) -> Result<Post> {
        let post: Post = self.get_json(&format!("/posts/{id}")).await?;
        Ok(resolve_post_media(self.files_base(), post))
    }

    /// Requires a session; zero media files means no `media` part at all
    pub async fn create_post(&self, caption: &str, media: Vec<MediaUpload>) -> Result<Post> {
        let session = self.require_session()?;
        let mut form = Form::new()
            .text("userId", session.user_id.clone())
            .text("caption", caption.to_string());
        for file in media {
            form = form.part("media", file.into_part()?);
        }
        self.post_multipart("/posts", form).await
    }

    pub async fn update_post(
        &self,
        id: i64,
        caption: &str,
        media: Vec<MediaUpload>,
        keep_existing_media: bool,
    ) -> Result<Post> {
        let mut form = Form::new()
            .text("caption", caption.to_string())
            .text("keepExistingMedia", keep_existing_media.to_string());
        for file in media {
            form = form.part("media", file.into_part()?);
        }
        self.put_multipart(&format!("/posts/{id}"), form).await
    }

    /// Resolves to `true` on success
    pub async fn delete_post(&self, id: i64) -> Result<bool> {
        self.delete(&format!("/posts/{id}")).await
    }
}
