#![forbid(unsafe_code)]

//! Program configuration.
//!
//! Everything the run loop needs to know up front: grid size, log capacity
//! and placement, frame pacing, and the starting page. Validated once,
//! before the loop starts.

use std::fmt;
use std::time::Duration;

use tgrid_core::geometry::{Rect, Size};
use tgrid_widgets::PlacementError;

/// Smallest grid with a non-empty interior.
pub const MIN_GRID: u16 = 3;

/// Configuration for a [`Program`](crate::program::Program).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
    /// Grid width in cells, border included.
    pub width: u16,
    /// Grid height in cells, border included.
    pub height: u16,
    /// Maximum number of log messages kept.
    pub log_capacity: usize,
    /// Log panel region installed on every page that has none.
    pub log_region: Option<Rect>,
    /// Title row of the installed log panel.
    pub log_title: Option<String>,
    /// `None` blocks for each token; `Some(d)` redraws at least every `d`.
    pub frame_delay: Option<Duration>,
    /// Page shown first.
    pub initial_page: u8,
    /// Messages in the log before the first frame, oldest first.
    pub initial_log: Vec<String>,
}

impl Default for ProgramConfig {
    /// A 60x12 grid with a titled log panel on the right half, capacity
    /// 32, blocking input, starting on page 1.
    fn default() -> Self {
        Self {
            width: 60,
            height: 12,
            log_capacity: 32,
            log_region: Self::right_half_log_region(60, 12),
            log_title: Some("Echo output".to_string()),
            frame_delay: None,
            initial_page: 1,
            initial_log: Vec::new(),
        }
    }
}

impl ProgramConfig {
    /// A bare grid of the given size: no log panel, default everything else.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            log_region: None,
            log_title: None,
            ..Self::default()
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_log_region(mut self, region: Rect, title: Option<String>) -> Self {
        self.log_region = Some(region);
        self.log_title = title;
        self
    }

    #[must_use]
    pub fn with_frame_delay(mut self, delay: Option<Duration>) -> Self {
        self.frame_delay = delay;
        self
    }

    #[must_use]
    pub fn with_initial_page(mut self, page: u8) -> Self {
        self.initial_page = page;
        self
    }

    #[must_use]
    pub fn with_initial_log<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_log = messages.into_iter().map(Into::into).collect();
        self
    }

    /// Log region that fills the right half of the interior, for grids
    /// wide enough to split.
    pub fn right_half_log_region(width: u16, height: u16) -> Option<Rect> {
        let inner = Size::new(width, height).bounds().interior();
        if inner.width < 4 || inner.is_empty() {
            return None;
        }
        let half = inner.width / 2;
        Some(Rect::new(
            inner.x + inner.width - half,
            inner.y,
            half,
            inner.height,
        ))
    }

    /// Check the parts of the configuration that do not depend on pages.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_GRID || self.height < MIN_GRID {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.initial_page > 9 {
            return Err(ConfigError::UnknownPage(self.initial_page));
        }
        if let Some(region) = self.log_region {
            let inner = self.size().bounds().interior();
            if !inner.contains_rect(&region) {
                return Err(ConfigError::LogRegionOutsideBorder(region));
            }
        }
        Ok(())
    }
}

/// Invalid configuration, reported before the run loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid has no interior.
    GridTooSmall { width: u16, height: u16 },
    /// The log region is empty or touches the border.
    LogRegionOutsideBorder(Rect),
    /// No page with this id was supplied.
    UnknownPage(u8),
    /// Two pages share an id.
    DuplicatePage(u8),
    /// No pages were supplied.
    NoPages,
    /// A page was built for a different grid size.
    PageSizeMismatch { page: u8, expected: Size, actual: Size },
    /// The log panel could not be placed on a page.
    LogPanel { page: u8, source: PlacementError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { width, height } => write!(
                f,
                "grid {width}x{height} is too small (minimum {MIN_GRID}x{MIN_GRID})"
            ),
            Self::LogRegionOutsideBorder(r) => write!(
                f,
                "log region at ({}, {}) size {}x{} is not inside the border",
                r.x, r.y, r.width, r.height
            ),
            Self::UnknownPage(n) => write!(f, "unknown page {n}"),
            Self::DuplicatePage(n) => write!(f, "page {n} defined more than once"),
            Self::NoPages => write!(f, "at least one page is required"),
            Self::PageSizeMismatch {
                page,
                expected,
                actual,
            } => write!(
                f,
                "page {page} is {}x{}, expected {}x{}",
                actual.width, actual.height, expected.width, expected.height
            ),
            Self::LogPanel { page, source } => {
                write!(f, "cannot place log panel on page {page}: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::LogPanel { source, .. } = self {
            return Some(source);
        }
        None
    }
}
