use crate::catalog::{Catalog, Role};
use crate::interactive_ratatui::domain::models::{SearchRequest, SearchResponse};
use crate::query::match_roles;
use anyhow::{Result, bail};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub struct SearchService {
    catalog: Arc<Catalog>,
    latency: Duration,
}

impl SearchService {
    pub fn new(catalog: Arc<Catalog>, latency: Duration) -> Self {
        Self { catalog, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Match the trimmed query against the catalog, then hold the result for
    /// the simulated round-trip latency
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<Role>> {
        let query = request.query.trim();
        if query.is_empty() {
            bail!("search request {} has an empty query", request.id);
        }

        let started = Instant::now();
        let results = match_roles(query, self.catalog.roles());

        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        tracing::debug!(
            id = request.id,
            query,
            matches = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search finished"
        );
        Ok(results)
    }

    /// Run a search and fold any failure into the response
    pub fn respond(&self, request: &SearchRequest) -> SearchResponse {
        let outcome = self.search(request).map_err(|e| {
            tracing::warn!(id = request.id, error = %e, "search failed");
            e.to_string()
        });
        SearchResponse {
            id: request.id,
            outcome,
        }
    }
}
