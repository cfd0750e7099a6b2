//! Snapshot orchestration: one build = one immutable [`StatusSnapshot`].
//!
//! Each build is independent and stateless — the clients hold no mutable
//! state, so any number of builds may run in parallel. Within a build
//! the primary document fetch and the monitor path run concurrently;
//! only the primary path can fail the build.

use chrono::{Local, NaiveDate, Utc};
use tracing::debug;

use statuscope_api::{StatusPageClient, TransportConfig, UptimeClient};

use crate::aggregate::incidents::bucket_reports;
use crate::aggregate::monitors::collect_monitors;
use crate::aggregate::services::build_sections;
use crate::config::StatusConfig;
use crate::error::CoreError;
use crate::model::{AggregateState, Monitor, StatusSnapshot};
use crate::resolve::IncludedPool;

/// Snapshot builder owning the upstream clients.
pub struct Statuscope {
    status_page: StatusPageClient,
    uptime: Option<UptimeClient>,
    history_days: usize,
}

impl Statuscope {
    /// Build the clients from a config.
    ///
    /// An absent uptime token is not an error: the monitor source is
    /// simply unconfigured and snapshots carry an empty monitor list.
    pub fn new(config: &StatusConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };

        let status_page = StatusPageClient::new(config.status_page_url.as_str(), &transport)
            .map_err(|e| CoreError::Config {
                message: format!("status page client: {e}"),
            })?;

        let uptime = config
            .uptime_token
            .as_ref()
            .map(|token| {
                UptimeClient::from_token(config.uptime_api_url.as_str(), token, &transport)
            })
            .transpose()
            .map_err(|e| CoreError::Config {
                message: format!("uptime client: {e}"),
            })?;

        Ok(Self {
            status_page,
            uptime,
            history_days: config.history_days,
        })
    }

    /// Build one snapshot.
    ///
    /// The status-page document and the monitor path are fetched
    /// concurrently; they do not depend on each other. A failed primary
    /// fetch aborts the build; the monitor path only ever degrades.
    pub async fn snapshot(&self) -> Result<StatusSnapshot, CoreError> {
        let today = Local::now().date_naive();

        let (doc_result, monitors) = tokio::join!(
            self.status_page.fetch_status_page(),
            self.fetch_monitors(today),
        );
        let doc = doc_result?;
        let now = Utc::now();

        let pool = IncludedPool::new(&doc.included);
        let sections = build_sections(&doc, &pool, today, self.history_days);
        let (ongoing_incidents, past_incidents) =
            bucket_reports(&doc.data.relationships.status_reports.data, &pool, now);

        let aggregate_state = doc
            .data
            .attributes
            .aggregate_state
            .as_deref()
            .and_then(AggregateState::parse)
            .unwrap_or(AggregateState::Operational);

        debug!(
            sections = sections.len(),
            ongoing = ongoing_incidents.len(),
            past = past_incidents.len(),
            monitors = monitors.len(),
            "snapshot build complete"
        );

        Ok(StatusSnapshot {
            company_name: doc.data.attributes.company_name.clone(),
            aggregate_state,
            sections,
            ongoing_incidents,
            past_incidents,
            monitors,
            fetched_at: now,
        })
    }

    async fn fetch_monitors(&self, today: NaiveDate) -> Vec<Monitor> {
        match &self.uptime {
            Some(client) => collect_monitors(client, today, self.history_days).await,
            None => Vec::new(),
        }
    }
}
