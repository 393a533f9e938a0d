// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Derived gallery views: featured strip, category filter, and the lightbox
// cursor. All functions are pure; they never reorder the collection.

use crate::types::{Category, Project};

/// Featured projects in insertion order, at most `limit`.
pub fn featured_projects(projects: &[Project], limit: usize) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).take(limit).collect()
}

/// Selected entry of the portfolio filter bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == *category,
        }
    }

    /// Translation key of the button label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::All => "portfolio.all",
            Self::Only(category) => category.label_key(),
        }
    }

    /// Filter bar entries, in display order.
    pub fn bar() -> Vec<CategoryFilter> {
        std::iter::once(Self::All)
            .chain(Category::all().iter().copied().map(Self::Only))
            .collect()
    }
}

/// Projects passing `filter`, in insertion order.
pub fn filter_projects(projects: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Full-screen image viewer over one project's images.
///
/// The index never leaves `0..images.len()`; stepping past either end is a
/// no-op rather than a wrap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    project: Option<Project>,
    index: usize,
}

impl Lightbox {
    pub fn open(&mut self, project: Project, index: usize) {
        self.index = index.min(project.images.len().saturating_sub(1));
        self.project = Some(project);
    }

    pub fn close(&mut self) {
        self.project = None;
        self.index = 0;
    }

    pub fn is_open(&self) -> bool {
        self.project.is_some()
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn image_count(&self) -> usize {
        self.project.as_ref().map_or(0, |p| p.images.len())
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.image_count()
    }

    pub fn has_previous(&self) -> bool {
        self.project.is_some() && self.index > 0
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.index -= 1;
        }
    }

    /// URL of the image currently on screen.
    pub fn current_image(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|p| p.images.get(self.index))
            .map(String::as_str)
    }

    /// Navigation arrows are only shown for multi-image projects.
    pub fn shows_navigation(&self) -> bool {
        self.image_count() > 1
    }

    /// "2 of 5", or `None` for single-image projects.
    pub fn counter(&self) -> Option<String> {
        self.shows_navigation()
            .then(|| format!("{} of {}", self.index + 1, self.image_count()))
    }
}
