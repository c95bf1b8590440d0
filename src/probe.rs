//! The request, persist and summarize sequence.

use crate::clients::animethemes::{AnimeSearch, AnimeThemesClient, SearchResult};
use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::models::anime::SearchResponse;
use crate::snapshot;
use crate::summary;
use reqwest::StatusCode;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug)]
pub enum ProbeOutcome {
    /// 200 response, written to `path`. `anime_count` is `None` when the
    /// response had no `anime` array.
    Saved {
        path: PathBuf,
        anime_count: Option<usize>,
    },
    /// Any other status. Nothing was written.
    Rejected { status: StatusCode, body: String },
}

pub struct Probe {
    client: AnimeThemesClient,
    search: AnimeSearch,
    output_dir: Option<PathBuf>,
}

impl Probe {
    #[must_use]
    pub fn new(client: AnimeThemesClient, search: AnimeSearch) -> Self {
        Self {
            client,
            search,
            output_dir: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &ProbeConfig) -> Self {
        let search = AnimeSearch {
            query: config.query.clone(),
            fields: config.fields.clone(),
            include: config.include.clone(),
        };

        Self::new(AnimeThemesClient::new(config.base_url.clone()), search)
            .with_output_dir(config.output_dir.as_ref().map(PathBuf::from))
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    #[must_use]
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Runs one probe, writing progress and the summary to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ProbeOutcome, ProbeError> {
        let endpoint = self.client.anime_url()?;
        writeln!(out, "Making request to {endpoint}...")?;
        info!("Searching AnimeThemes for '{}'", self.search.query);

        let document = match self.client.search(&self.search).await? {
            SearchResult::Fetched(document) => document,
            SearchResult::Rejected { status, body } => {
                warn!("AnimeThemes request rejected with {}", status);
                writeln!(
                    out,
                    "Request failed with status code: {}",
                    status.as_u16()
                )?;
                writeln!(out, "{body}")?;
                return Ok(ProbeOutcome::Rejected { status, body });
            }
        };

        let now = chrono::Local::now();
        let path = snapshot::write_snapshot(self.output_dir(), &document, &now).await?;
        writeln!(out, "Full response saved to {}", path.display())?;

        let response = SearchResponse::new(&document);
        summary::write_summary(out, &response)?;

        Ok(ProbeOutcome::Saved {
            path,
            anime_count: response.anime().map(<[serde_json::Value]>::len),
        })
    }
}
