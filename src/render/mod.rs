//! Pure display formatting shared by the CLI printer and the TUI layout.

use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::{Page, Story};
use crate::fetcher::FrontPage;

/// Relative age of a submission, floored to whole hours.
pub fn relative_age(submitted: i64, now: DateTime<Utc>) -> String {
    let hours = (now.timestamp() - submitted) / 3600;

    if hours < 1 {
        "less than an hour ago".to_string()
    } else if hours < 24 {
        let unit = if hours == 1 { "hour" } else { "hours" };
        format!("{} {} ago", hours, unit)
    } else {
        let days = hours / 24;
        let unit = if days == 1 { "day" } else { "days" };
        format!("{} {} ago", days, unit)
    }
}

/// Hostname of an external story URL, with a single leading `www.` removed.
/// `None` for self posts and for URLs that do not parse.
pub fn hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    Some(host.to_string())
}

/// Title row: `12. Title (example.com)`, the parenthetical only for
/// external links.
pub fn title_line(rank: usize, story: &Story) -> String {
    match story.url.as_deref().and_then(hostname) {
        Some(domain) => format!("{}. {} ({})", rank, story.display_title(), domain),
        None => format!("{}. {}", rank, story.display_title()),
    }
}

/// Metadata row: `104 points by dhouston 2 hours ago | 71 comments`.
pub fn meta_line(story: &Story, now: DateTime<Utc>) -> String {
    format!(
        "{} points by {} {} | {} comments",
        story.score,
        story.by,
        relative_age(story.time, now),
        story.comment_count()
    )
}

/// Pagination controls: `Previous` appears only past page 1, `More` always.
pub fn pagination_line(page: Page) -> String {
    if page.prev().is_some() {
        "Previous | More".to_string()
    } else {
        "More".to_string()
    }
}

/// A whole page as plain text lines, used by the one-shot printer.
pub fn front_page_lines(front: &FrontPage, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in &front.stories {
        lines.push(title_line(entry.rank, &entry.story));
        lines.push(format!("    {}", meta_line(&entry.story, now)));
    }
    lines.push(String::new());
    lines.push(format!(
        "{}  ({})",
        pagination_line(front.page),
        front.page.fragment()
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::RankedStory;

    fn story(id: u64, url: Option<&str>) -> Story {
        Story {
            id,
            title: "Example".into(),
            url: url.map(String::from),
            by: "alice".into(),
            score: 104,
            time: 0,
            descendants: Some(71),
        }
    }

    fn at(secs_ago: i64) -> (i64, DateTime<Utc>) {
        let now = Utc::now();
        (now.timestamp() - secs_ago, now)
    }

    #[test]
    fn test_relative_age_under_an_hour() {
        let (submitted, now) = at(1800);
        assert_eq!(relative_age(submitted, now), "less than an hour ago");
    }

    #[test]
    fn test_relative_age_hours() {
        let (submitted, now) = at(3600);
        assert_eq!(relative_age(submitted, now), "1 hour ago");
        let (submitted, now) = at(3600 * 2);
        assert_eq!(relative_age(submitted, now), "2 hours ago");
        let (submitted, now) = at(3600 * 23 + 3599);
        assert_eq!(relative_age(submitted, now), "23 hours ago");
    }

    #[test]
    fn test_relative_age_days() {
        let (submitted, now) = at(3600 * 25);
        assert_eq!(relative_age(submitted, now), "1 day ago");
        let (submitted, now) = at(3600 * 49);
        assert_eq!(relative_age(submitted, now), "2 days ago");
    }

    #[test]
    fn test_relative_age_future_timestamp() {
        let (submitted, now) = at(-120);
        assert_eq!(relative_age(submitted, now), "less than an hour ago");
    }

    #[test]
    fn test_hostname_strips_leading_www_only() {
        assert_eq!(
            hostname("https://www.example.com/a").as_deref(),
            Some("example.com")
        );
        assert_eq!(
            hostname("https://example.com/a").as_deref(),
            Some("example.com")
        );
        assert_eq!(
            hostname("https://www2.example.com/a").as_deref(),
            Some("www2.example.com")
        );
        assert_eq!(
            hostname("https://news.www.example.com/").as_deref(),
            Some("news.www.example.com")
        );
    }

    #[test]
    fn test_hostname_of_garbage_is_absent() {
        assert_eq!(hostname("not a url"), None);
    }

    #[test]
    fn test_title_line_with_domain() {
        let s = story(1, Some("https://www.example.com/post"));
        assert_eq!(title_line(31, &s), "31. Example (example.com)");
    }

    #[test]
    fn test_title_line_self_post_has_no_parenthetical() {
        let s = story(1, None);
        assert_eq!(title_line(1, &s), "1. Example");
    }

    #[test]
    fn test_meta_line() {
        let now = Utc::now();
        let mut s = story(1, None);
        s.time = now.timestamp() - 3600 * 2;
        assert_eq!(
            meta_line(&s, now),
            "104 points by alice 2 hours ago | 71 comments"
        );
    }

    #[test]
    fn test_meta_line_missing_descendants_shows_zero() {
        let now = Utc::now();
        let mut s = story(1, None);
        s.descendants = None;
        s.time = now.timestamp();
        assert_eq!(
            meta_line(&s, now),
            "104 points by alice less than an hour ago | 0 comments"
        );
    }

    #[test]
    fn test_pagination_first_page_has_no_previous() {
        assert_eq!(pagination_line(Page::FIRST), "More");
        assert_eq!(pagination_line(Page::new(2)), "Previous | More");
    }

    #[test]
    fn test_front_page_lines() {
        let now = Utc::now();
        let mut s = story(7, Some("https://example.com/x"));
        s.time = now.timestamp();
        let front = FrontPage {
            page: Page::FIRST,
            stories: vec![RankedStory { rank: 1, story: s }],
        };

        let lines = front_page_lines(&front, now);
        assert_eq!(lines[0], "1. Example (example.com)");
        assert_eq!(
            lines[1],
            "    104 points by alice less than an hour ago | 71 comments"
        );
        assert_eq!(lines.last().unwrap(), "More  (#page=1)");
    }
}
