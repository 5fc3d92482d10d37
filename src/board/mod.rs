// ABOUTME: Job board client session tying fetch, filters, stats and rendering together
// ABOUTME: Owns the last-fetched job set and the page view model

pub mod debounce;
pub mod detail;
pub mod facets;
pub mod page;
pub mod render;
pub mod stats;

use std::sync::{Arc, Weak};
use tokio::sync::Mutex;

use crate::config::BoardConfig;
use crate::error::Result;
use crate::remote::models::{FeedSource, Job, JobFeed};
use crate::remote::RemoteClient;

use self::debounce::Debouncer;
use self::facets::{set_checked, FilterOptions};
use self::page::{GridView, Modal, ModalTarget, Page, SearchForm};
use self::stats::Stats;

/// Handle to one job board session. Clones share the same state.
#[derive(Clone)]
pub struct JobBoardClient {
    inner: Arc<Inner>,
}

struct Inner {
    config: BoardConfig,
    remote: RemoteClient,
    session: Mutex<Session>,
    debouncer: Mutex<Debouncer>,
}

#[derive(Default)]
struct Session {
    all_jobs: Vec<Job>,
    /// Jobs behind the cards currently in the grid.
    shown: Vec<Job>,
    page: Page,
}

impl Session {
    fn show_grid(&mut self, view: Result<GridView>) {
        self.page.grid = match view {
            Ok(view) => view,
            Err(err) => {
                tracing::error!(error = %err, "failed to render job grid");
                GridView::Error {
                    message: err.to_string(),
                    html: String::new(),
                }
            }
        };
        if !matches!(self.page.grid, GridView::Cards { .. }) {
            self.shown.clear();
        }
    }

    fn render_jobs(&mut self, jobs: Vec<Job>) {
        let view = render::render_grid(&jobs);
        self.shown = jobs;
        self.show_grid(view);
    }

    fn update_stats(&mut self) {
        self.page.stats = Stats::from_jobs(&self.all_jobs);
    }

    fn update_filter_options(&mut self, limit: usize) {
        let options = FilterOptions::from_jobs(&self.all_jobs, limit);
        self.page.location_choices = options.locations;
        self.page.company_choices = options.companies;
        self.render_filter_options();
    }

    fn render_filter_options(&mut self) {
        let facets = &self.page.form.facets;
        let locations =
            render::render_filter_options("location", &self.page.location_choices, &facets.locations);
        let companies =
            render::render_filter_options("company", &self.page.company_choices, &facets.companies);

        match (locations, companies) {
            (Ok(locations), Ok(companies)) => {
                self.page.location_options = locations;
                self.page.company_options = companies;
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!(error = %err, "failed to render filter options");
            }
        }
    }

    fn apply_feed(&mut self, feed: JobFeed, option_limit: usize) {
        self.page.status = match feed.source {
            FeedSource::Live { last_updated } => {
                last_updated.map(|ts| format!("Last updated: {}", ts))
            }
            FeedSource::Fallback { error } => {
                tracing::warn!(
                    error = error.as_deref().unwrap_or("unknown"),
                    "job feed returned fallback listings"
                );
                Some("Showing cached listings".to_string())
            }
        };

        self.all_jobs = feed.jobs;
        self.update_stats();
        self.update_filter_options(option_limit);
        self.render_jobs(self.all_jobs.clone());
    }

    fn close_modal(&mut self) {
        self.page.modal.visible = false;
        self.page.scroll_locked = false;
    }
}

impl JobBoardClient {
    pub fn new(config: BoardConfig) -> Result<Self> {
        let remote = RemoteClient::new(config.api_base_url.clone(), config.timeout())?;
        let debouncer = Debouncer::new(config.debounce());

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                remote,
                session: Mutex::new(Session::default()),
                debouncer: Mutex::new(debouncer),
            }),
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.inner.config
    }

    /// The last successfully fetched job set, in server order.
    pub async fn all_jobs(&self) -> Vec<Job> {
        self.inner.session.lock().await.all_jobs.clone()
    }

    /// Jobs behind the cards currently rendered in the grid.
    pub async fn shown_jobs(&self) -> Vec<Job> {
        self.inner.session.lock().await.shown.clone()
    }

    pub async fn page(&self) -> Page {
        self.inner.session.lock().await.page.clone()
    }

    pub async fn render_page(&self) -> Result<String> {
        let session = self.inner.session.lock().await;
        render::render_page(&session.page)
    }

    /// Fetch from the server and rebuild stats, filter options and grid.
    ///
    /// Failures leave the job set untouched and put an error state with a
    /// retry action in the grid. The session lock is not held across the
    /// request, so whichever fetch settles last wins.
    pub async fn fetch_jobs(&self, query: &str, location: &str) {
        {
            let mut session = self.inner.session.lock().await;
            session.show_grid(render::render_loading(self.inner.config.skeleton_count));
        }

        let result = self.inner.remote.fetch_jobs(query, location).await;

        let mut session = self.inner.session.lock().await;
        match result {
            Ok(feed) => {
                tracing::info!(
                    count = feed.jobs.len(),
                    degraded = feed.is_degraded(),
                    "job feed loaded"
                );
                session.apply_feed(feed, self.inner.config.max_filter_options);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch jobs");
                session.show_grid(render::render_error(&err.to_string()));
            }
        }
    }

    /// Retry action offered by the error state: an unfiltered fetch.
    pub async fn retry(&self) {
        self.fetch_jobs("", "").await;
    }

    /// Schedule a filter pass after the debounce delay, replacing any pending one.
    ///
    /// The form is captured now; the pass runs with these values.
    pub async fn filter_jobs(&self) {
        let form = self.inner.session.lock().await.page.form.clone();
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);

        self.inner.debouncer.lock().await.schedule(async move {
            if let Some(inner) = inner.upgrade() {
                JobBoardClient { inner }.run_filter(form).await;
            }
        });
    }

    /// Any checked facet filters `all_jobs` locally; otherwise the text
    /// fields go to the server as a new search.
    pub async fn run_filter(&self, form: SearchForm) {
        if form.facets.is_empty() {
            self.fetch_jobs(&form.search_text, &form.location_text).await;
            return;
        }

        let mut session = self.inner.session.lock().await;
        let matches = form.facets.apply(&session.all_jobs);
        tracing::debug!(matched = matches.len(), "applied facet filters");
        session.render_jobs(matches);
    }

    /// Reset text fields and checkboxes, then fetch the unfiltered set.
    pub async fn clear_search(&self) {
        self.inner.debouncer.lock().await.cancel();
        {
            let mut session = self.inner.session.lock().await;
            session.page.form.reset();
            session.render_filter_options();
        }
        self.fetch_jobs("", "").await;
    }

    pub async fn set_search_text(&self, text: &str) {
        self.inner.session.lock().await.page.form.search_text = text.to_string();
        self.filter_jobs().await;
    }

    pub async fn set_location_text(&self, text: &str) {
        self.inner.session.lock().await.page.form.location_text = text.to_string();
        self.filter_jobs().await;
    }

    pub async fn toggle_type(&self, value: &str, checked: bool) {
        {
            let mut session = self.inner.session.lock().await;
            set_checked(&mut session.page.form.facets.types, value, checked);
        }
        self.filter_jobs().await;
    }

    pub async fn toggle_location(&self, value: &str, checked: bool) {
        {
            let mut session = self.inner.session.lock().await;
            set_checked(&mut session.page.form.facets.locations, value, checked);
            session.render_filter_options();
        }
        self.filter_jobs().await;
    }

    pub async fn toggle_company(&self, value: &str, checked: bool) {
        {
            let mut session = self.inner.session.lock().await;
            set_checked(&mut session.page.form.facets.companies, value, checked);
            session.render_filter_options();
        }
        self.filter_jobs().await;
    }

    /// Open the detail modal for `job` under a fresh reference id.
    ///
    /// Returns the reference, or `None` if the modal could not be rendered.
    pub async fn view_details(&self, job: &Job) -> Option<String> {
        let reference = detail::generate_reference();
        let html = match render::render_detail(job, &reference) {
            Ok(html) => html,
            Err(err) => {
                tracing::error!(error = %err, title = %job.title, "failed to render job details");
                return None;
            }
        };

        let mut session = self.inner.session.lock().await;
        session.page.modal = Modal {
            visible: true,
            reference: Some(reference.clone()),
            html,
        };
        session.page.scroll_locked = true;
        Some(reference)
    }

    /// Open details for the card at `index` in the current grid.
    pub async fn view_details_at(&self, index: usize) -> Option<String> {
        let job = self.inner.session.lock().await.shown.get(index).cloned()?;
        self.view_details(&job).await
    }

    pub async fn close_details(&self) {
        self.inner.session.lock().await.close_modal();
    }

    /// Clicks on the scrim close the modal; clicks inside the content do not.
    pub async fn click_modal(&self, target: ModalTarget) {
        if target == ModalTarget::Backdrop {
            self.close_details().await;
        }
    }
}
