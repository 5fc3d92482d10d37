// ABOUTME: HTML fragments for every region of the job board page
// ABOUTME: askama templates with autoescaping over job records

use askama::Template;
use std::collections::BTreeSet;

use super::facets::type_choices;
use super::page::{GridView, Page};
use crate::error::Result;
use crate::remote::models::Job;

struct JobCard<'a> {
    title: &'a str,
    company: &'a str,
    location: &'a str,
    job_type: &'a str,
    salary: &'a str,
    apply_link: &'a str,
}

impl<'a> From<&'a Job> for JobCard<'a> {
    fn from(job: &'a Job) -> Self {
        Self {
            title: &job.title,
            company: &job.company,
            location: &job.location,
            job_type: job.job_type(),
            salary: job.salary(),
            apply_link: job.apply_link(),
        }
    }
}

#[derive(Template)]
#[template(path = "job_grid.html")]
struct JobGridTemplate<'a> {
    cards: Vec<JobCard<'a>>,
}

#[derive(Template)]
#[template(path = "grid_loading.html")]
struct LoadingTemplate {
    slots: Vec<usize>,
}

#[derive(Template)]
#[template(path = "grid_empty.html")]
struct EmptyTemplate {}

#[derive(Template)]
#[template(path = "grid_error.html")]
struct ErrorTemplate<'a> {
    message: &'a str,
}

struct FilterOption<'a> {
    value: &'a str,
    checked: bool,
}

#[derive(Template)]
#[template(path = "filter_options.html")]
struct FilterOptionsTemplate<'a> {
    group: &'a str,
    options: Vec<FilterOption<'a>>,
}

#[derive(Template)]
#[template(path = "job_modal.html")]
struct DetailTemplate<'a> {
    reference: &'a str,
    title: &'a str,
    company: &'a str,
    location: &'a str,
    job_type: &'a str,
    category: &'a str,
    salary: &'a str,
    description: String,
    apply_link: &'a str,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    search_text: &'a str,
    location_text: &'a str,
    total: usize,
    top_location: &'a str,
    trending_category: &'a str,
    status: &'a str,
    type_options: String,
    location_options: &'a str,
    company_options: &'a str,
    grid: &'a str,
    modal: &'a str,
    modal_visible: bool,
    scroll_locked: bool,
}

/// Empty input takes the empty-state path; otherwise one card per job, in order.
pub fn render_grid(jobs: &[Job]) -> Result<GridView> {
    if jobs.is_empty() {
        return Ok(GridView::Empty {
            html: EmptyTemplate {}.render()?,
        });
    }

    let template = JobGridTemplate {
        cards: jobs.iter().map(JobCard::from).collect(),
    };
    Ok(GridView::Cards {
        count: jobs.len(),
        html: template.render()?,
    })
}

pub fn render_loading(count: usize) -> Result<GridView> {
    let template = LoadingTemplate {
        slots: (0..count).collect(),
    };
    Ok(GridView::Loading {
        html: template.render()?,
    })
}

pub fn render_error(message: &str) -> Result<GridView> {
    Ok(GridView::Error {
        message: message.to_string(),
        html: ErrorTemplate { message }.render()?,
    })
}

pub fn render_filter_options(
    group: &str,
    values: &[String],
    checked: &BTreeSet<String>,
) -> Result<String> {
    let template = FilterOptionsTemplate {
        group,
        options: values
            .iter()
            .map(|value| FilterOption {
                value,
                checked: checked.contains(value),
            })
            .collect(),
    };
    Ok(template.render()?)
}

pub fn render_detail(job: &Job, reference: &str) -> Result<String> {
    let template = DetailTemplate {
        reference,
        title: &job.title,
        company: &job.company,
        location: &job.location,
        job_type: job.job_type(),
        category: job.category(),
        salary: job.salary(),
        description: job.description(),
        apply_link: job.apply_link(),
    };
    Ok(template.render()?)
}

pub fn render_page(page: &Page) -> Result<String> {
    let types = &page.form.facets.types;
    let template = PageTemplate {
        search_text: &page.form.search_text,
        location_text: &page.form.location_text,
        total: page.stats.total,
        top_location: page.stats.top_location.as_deref().unwrap_or(""),
        trending_category: &page.stats.trending_category,
        status: page.status.as_deref().unwrap_or(""),
        type_options: render_filter_options("type", &type_choices(types), types)?,
        location_options: &page.location_options,
        company_options: &page.company_options,
        grid: page.grid.html(),
        modal: &page.modal.html,
        modal_visible: page.modal.visible,
        scroll_locked: page.scroll_locked,
    };
    Ok(template.render()?)
}
