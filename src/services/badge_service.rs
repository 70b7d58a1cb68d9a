//! Badge service
//!
//! Front door for badge requests: renders through [`BadgeRenderer`] and, when
//! caching is enabled, serves repeats from [`BadgeCache`].

use tracing::debug;

use crate::badge::{BadgeRenderer, BadgeRequest};
use crate::config::CacheConfig;
use crate::errors::AppResult;
use crate::services::badge_cache::BadgeCache;

#[derive(Debug, Clone)]
pub struct BadgeService {
    renderer: BadgeRenderer,
    cache: Option<BadgeCache>,
}

impl BadgeService {
    pub fn new(renderer: BadgeRenderer, cache: Option<BadgeCache>) -> Self {
        Self { renderer, cache }
    }

    /// Build a service with the default renderer, caching only when
    /// `config.enabled` is set.
    pub fn from_config(config: &CacheConfig) -> AppResult<Self> {
        let cache = if config.enabled {
            Some(BadgeCache::from_config(config)?)
        } else {
            None
        };
        Ok(Self::new(BadgeRenderer::default(), cache))
    }

    pub fn cache(&self) -> Option<&BadgeCache> {
        self.cache.as_ref()
    }

    /// Rendered badge for `request`, from cache when a live entry exists.
    pub async fn badge(&self, request: &BadgeRequest) -> String {
        let Some(cache) = &self.cache else {
            return self.renderer.render(request);
        };

        let key = request.cache_key();
        if let Some(document) = cache.get(&key).await {
            debug!("Badge cache hit for '{}'", request.title());
            return document;
        }

        debug!("Badge cache miss for '{}', rendering", request.title());
        let document = self.renderer.render(request);
        cache.put(key, document.clone()).await;
        document
    }
}
