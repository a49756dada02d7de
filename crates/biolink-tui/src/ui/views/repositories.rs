use biolink_core::constants::DESCRIPTION_MAX_LINES;
use biolink_core::models::{GitHubOverview, RepoSummary};
use biolink_core::WidgetState;
use chrono::{DateTime, Utc};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::card::{FORK_GLYPH, INDENT, META_SEPARATOR, SPACER, STAR_GLYPH, STATUS_DOT};
use crate::ui::format::{clamp_lines, format_relative_time, truncate_with_ellipsis};
use crate::ui::theme::{language_color, Palette};

pub fn repository_lines(
    state: &WidgetState<GitHubOverview>,
    palette: &Palette,
    spinner: char,
    now: DateTime<Utc>,
    width: usize,
) -> Vec<Line<'static>> {
    match state {
        WidgetState::Loading => vec![Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(palette.accent_primary)),
            Span::styled("Loading GitHub data...", palette.text_muted()),
        ])],
        // One error state whichever request failed; nothing partial
        WidgetState::Failed(_) => vec![Line::styled("Failed to fetch GitHub data", palette.error())],
        WidgetState::Ready(overview) => overview_lines(overview, palette, now, width),
    }
}

fn overview_lines(
    overview: &GitHubOverview,
    palette: &Palette,
    now: DateTime<Utc>,
    width: usize,
) -> Vec<Line<'static>> {
    let tile = |value: u32, label: &'static str, color| {
        [
            Span::styled(
                format!(" {} ", value),
                Style::default()
                    .fg(color)
                    .bg(palette.bg_secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", label), palette.text_muted()),
        ]
    };

    let mut stats = vec![Span::styled(
        format!("@{}", overview.user.login),
        palette.text_primary(),
    )];
    stats.push(Span::raw(SPACER));
    stats.extend(tile(overview.user.followers, "Followers", palette.accent_success));
    stats.push(Span::raw(SPACER));
    stats.extend(tile(overview.user.public_repos, "Repos", palette.accent_special));

    let mut lines = vec![Line::from(stats)];

    let repos = overview.visible_repos();
    if repos.is_empty() {
        lines.push(Line::styled("No public repositories", palette.text_dim()));
    }
    for repo in repos {
        lines.extend(repo_lines(repo, palette, now, width));
    }
    lines
}

fn repo_lines(
    repo: &RepoSummary,
    palette: &Palette,
    now: DateTime<Utc>,
    width: usize,
) -> Vec<Line<'static>> {
    let text_width = width.saturating_sub(INDENT.len());

    let mut header = vec![
        Span::styled(truncate_with_ellipsis(&repo.name, text_width), palette.title()),
        Span::raw(SPACER),
        Span::styled(
            format!("{}{}", STAR_GLYPH, repo.stargazers_count),
            Style::default().fg(palette.accent_warning),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{}{}", FORK_GLYPH, repo.forks_count),
            palette.text_muted(),
        ),
    ];
    if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
        header.push(Span::raw(SPACER));
        header.push(Span::styled(
            STATUS_DOT,
            Style::default().fg(language_color(language)),
        ));
        header.push(Span::styled(language.to_string(), palette.text_muted()));
    }
    let mut lines = vec![Line::from(header)];

    if let Some(description) = repo.description.as_deref() {
        for line in clamp_lines(description, text_width, DESCRIPTION_MAX_LINES) {
            lines.push(Line::styled(format!("{}{}", INDENT, line), palette.text_muted()));
        }
    }

    let mut meta = vec![Span::raw(INDENT)];
    if let Some(updated) = repo.updated_at() {
        meta.push(Span::styled(
            format!("updated {}", format_relative_time(updated, now)),
            palette.text_dim(),
        ));
        meta.push(Span::styled(META_SEPARATOR, palette.text_dim()));
    }
    let used: usize = meta.iter().map(|span| span.width()).sum();
    meta.push(Span::styled(
        truncate_with_ellipsis(&repo.html_url, width.saturating_sub(used)),
        palette.link(),
    ));
    lines.push(Line::from(meta));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app::test_support::overview;
    use crate::ui::theme::DARK;
    use biolink_core::FetchError;
    use chrono::TimeZone;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap()
    }

    fn repo(id: u64, name: &str) -> RepoSummary {
        RepoSummary {
            id,
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/thirduserrr/{}", name),
            stargazers_count: 0,
            forks_count: 0,
            language: None,
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_loading_and_error() {
        let loading = repository_lines(&WidgetState::Loading, &DARK, '*', now(), 60);
        assert_eq!(text(&loading), vec!["* Loading GitHub data..."]);

        let failed = WidgetState::Failed(FetchError::Upstream("HTTP 403".to_string()));
        assert_eq!(
            text(&repository_lines(&failed, &DARK, '*', now(), 60)),
            vec!["Failed to fetch GitHub data"]
        );
    }

    #[test]
    fn test_stats_and_repo() {
        let lines = repository_lines(&WidgetState::Ready(overview()), &DARK, '*', now(), 60);
        let rendered = text(&lines);

        assert_eq!(rendered[0], "@thirduserrr   12  Followers   7  Repos");
        assert!(rendered[1].starts_with("fast-api-kit"));
        assert!(rendered[1].contains("5"));
        assert!(rendered[1].contains("Python"));
        assert_eq!(rendered[2], format!("{}Helpers for FastAPI services", INDENT));
        assert!(rendered[3].contains("updated 3d ago"));
        assert!(rendered[3].contains("https://github.com/thirduserrr/fast-api-kit"));
    }

    #[test]
    fn test_description_clamped_to_two_lines() {
        let mut data = overview();
        data.repos[0].description =
            Some("a description long enough to need more than two short lines of text".to_string());
        let lines = repository_lines(&WidgetState::Ready(data), &DARK, '*', now(), 23);
        let description: Vec<String> = text(&lines)
            .into_iter()
            .skip(2)
            .take_while(|line| !line.contains("updated"))
            .collect();

        assert_eq!(description.len(), 2);
        assert!(description[1].ends_with("..."));
    }

    #[test]
    fn test_at_most_four_repos() {
        let mut data = overview();
        data.repos = (0..6).map(|i| repo(i, &format!("repo-{}", i))).collect();
        let rendered = text(&repository_lines(&WidgetState::Ready(data), &DARK, '*', now(), 60));
        let joined = rendered.join("\n");

        assert!(joined.contains("repo-3"));
        assert!(!joined.contains("repo-4"));
    }

    #[test]
    fn test_no_repositories() {
        let mut data = overview();
        data.repos.clear();
        let rendered = text(&repository_lines(&WidgetState::Ready(data), &DARK, '*', now(), 60));
        assert_eq!(rendered[1], "No public repositories");
    }
}
