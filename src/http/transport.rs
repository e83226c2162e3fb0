// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use async_trait::async_trait;
use url::Url;

use super::Response;
use crate::error::Result;

/// Something that can perform the single GET a check needs.
///
/// [`HttpClient`](super::HttpClient) is the production implementation; tests
/// plug in canned or instrumented transports.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return status and headers
    async fn get(&self, url: &Url) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, url: &Url) -> Result<Response> {
        (**self).get(url).await
    }
}
