// ABOUTME: In-memory view model standing in for the page markup
// ABOUTME: Holds form inputs and the rendered fragment of each page region

use super::facets::FacetSelection;
use super::stats::Stats;

/// Current contents of the job grid region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Loading { html: String },
    Cards { count: usize, html: String },
    Empty { html: String },
    Error { message: String, html: String },
}

impl GridView {
    pub fn html(&self) -> &str {
        match self {
            GridView::Loading { html }
            | GridView::Cards { html, .. }
            | GridView::Empty { html }
            | GridView::Error { html, .. } => html,
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            GridView::Cards { count, .. } => *count,
            _ => 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GridView::Loading { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GridView::Error { .. })
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, GridView::Empty { .. })
    }
}

impl Default for GridView {
    fn default() -> Self {
        GridView::Loading {
            html: String::new(),
        }
    }
}

/// Search inputs and checkbox groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub search_text: String,
    pub location_text: String,
    pub facets: FacetSelection,
}

impl SearchForm {
    pub fn reset(&mut self) {
        self.search_text.clear();
        self.location_text.clear();
        self.facets.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal {
    pub visible: bool,
    pub reference: Option<String>,
    pub html: String,
}

/// Which part of the modal received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    /// The scrim around the content.
    Backdrop,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub form: SearchForm,
    pub stats: Stats,
    pub status: Option<String>,
    pub location_choices: Vec<String>,
    pub company_choices: Vec<String>,
    pub location_options: String,
    pub company_options: String,
    pub grid: GridView,
    pub modal: Modal,
    pub scroll_locked: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            form: SearchForm::default(),
            stats: Stats::from_jobs(&[]),
            status: None,
            location_choices: Vec::new(),
            company_choices: Vec::new(),
            location_options: String::new(),
            company_options: String::new(),
            grid: GridView::default(),
            modal: Modal::default(),
            scroll_locked: false,
        }
    }
}
