//! One "generate" action: window, fetch, parse, normalize, project.

use crate::aggregate::{aggregate, Summary};
use crate::config::ChartConfig;
use crate::fetch::Fetcher;
use crate::grid::ActivityGrid;
use crate::normalize::normalize_payload;
use crate::palette::Palette;
use crate::rendering::{render_svg, SvgOptions};
use crate::source::{source_for, SourceKind};
use crate::summary::summarize_weekly;
use crate::window::CalendarWindow;
use crate::{Error, Result};

/// Which projection of the grids to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// One cell per (week, day).
    #[default]
    Daily,
    /// One cell per week.
    Weekly,
}

/// Normalized grids for both sources over one window.
#[derive(Debug)]
pub struct Chart {
    pub window: CalendarWindow,
    pub github: ActivityGrid,
    pub gitlab: ActivityGrid,
    /// Sources that were requested but degraded to "no activity".
    pub failures: Vec<(SourceKind, Error)>,
}

impl Chart {
    /// Build from already-loaded payloads. `None` means the source was not
    /// requested and is simply empty.
    pub fn from_payloads(
        window: CalendarWindow,
        github: Option<Result<String>>,
        gitlab: Option<Result<String>>,
    ) -> Self {
        let mut failures = Vec::new();
        let mut load = |kind: SourceKind, payload: Option<Result<String>>| {
            let (Some(payload), Some(source)) = (payload, source_for(kind)) else {
                return ActivityGrid::new(window.total_weeks);
            };
            let (grid, err) = normalize_payload(source.as_ref(), payload, &window);
            if let Some(err) = err {
                failures.push((kind, err));
            }
            grid
        };
        let github = load(SourceKind::Github, github);
        let gitlab = load(SourceKind::Gitlab, gitlab);

        Self {
            window,
            github,
            gitlab,
            failures,
        }
    }

    pub fn daily(&self, palette: &Palette) -> Summary {
        aggregate(&self.github, &self.gitlab, self.window.total_weeks, palette)
    }

    pub fn weekly(&self, palette: &Palette) -> Summary {
        summarize_weekly(&self.github, &self.gitlab, &self.window, palette)
    }

    pub fn summary(&self, view: View, palette: &Palette) -> Summary {
        match view {
            View::Daily => self.daily(palette),
            View::Weekly => self.weekly(palette),
        }
    }

    /// Render a view as an SVG document using `config`'s palette and footer.
    pub fn to_svg(&self, view: View, config: &ChartConfig) -> String {
        let summary = self.summary(view, &config.palette);
        let options = SvgOptions {
            palette: config.palette.clone(),
            footer: config.footer.clone(),
        };
        render_svg(&summary, self.window.total_weeks, view, &options)
    }
}

/// Where one source's payload comes from.
#[derive(Debug)]
pub enum SourceInput<'a> {
    /// Download the payload for this username.
    User(&'a str),
    /// Use an already-loaded payload, e.g. read from disk.
    Payload(Result<String>),
}

/// Fetches both sources and builds a [`Chart`].
#[derive(Debug, Clone)]
pub struct Generator {
    fetcher: Fetcher,
}

impl Generator {
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        self.fetcher.config()
    }

    /// Chart for the year ending today.
    pub async fn generate(&self, github_user: Option<&str>, gitlab_user: Option<&str>) -> Chart {
        self.generate_for(CalendarWindow::today(), github_user, gitlab_user)
            .await
    }

    /// Chart for an explicit window. Source failures never abort; they are
    /// recorded in [`Chart::failures`].
    pub async fn generate_for(
        &self,
        window: CalendarWindow,
        github_user: Option<&str>,
        gitlab_user: Option<&str>,
    ) -> Chart {
        self.generate_from(
            window,
            github_user.map(SourceInput::User),
            gitlab_user.map(SourceInput::User),
        )
        .await
    }

    /// Chart from a mix of usernames and preloaded payloads. Both downloads
    /// run concurrently; a `None` source is left empty.
    pub async fn generate_from(
        &self,
        window: CalendarWindow,
        github: Option<SourceInput<'_>>,
        gitlab: Option<SourceInput<'_>>,
    ) -> Chart {
        let (github, gitlab) = futures::join!(
            self.resolve(SourceKind::Github, github),
            self.resolve(SourceKind::Gitlab, gitlab),
        );
        Chart::from_payloads(window, github, gitlab)
    }

    async fn resolve(&self, kind: SourceKind, input: Option<SourceInput<'_>>) -> Option<Result<String>> {
        match input? {
            SourceInput::User(user) => Some(self.fetcher.fetch(kind, user).await),
            SourceInput::Payload(payload) => Some(payload),
        }
    }
}
