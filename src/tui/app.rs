use crate::app::Result;
use crate::domain::Page;
use crate::fetcher::{FrontPage, RankedStory};

/// Message shown when a load cycle fails. Deliberately static: the cause
/// goes to the log, not the content area.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading stories. Please try again later.";

/// What the content area is currently showing.
#[derive(Debug)]
pub enum View {
    Loading,
    Front(FrontPage),
    Error(String),
}

pub struct TuiApp {
    /// Last successfully rendered page. Pagination and refreshes start
    /// here; a failed cycle never moves it.
    pub page: Page,
    pub view: View,
    pub selected: usize,
    /// Newest issued load generation; results from older cycles are stale.
    pub generation: u64,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl TuiApp {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            view: View::Loading,
            selected: 0,
            generation: 0,
            should_quit: false,
            status_message: None,
        }
    }

    /// Register a new load cycle and return its generation tag. The
    /// content area shows the loading placeholder until the cycle lands.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.view = View::Loading;
        self.generation
    }

    /// Apply a finished load cycle. A result tagged with anything but the
    /// newest generation was superseded by a later trigger and is dropped.
    /// Returns whether the result was applied.
    pub fn apply_load(&mut self, generation: u64, result: Result<FrontPage>) -> bool {
        if generation != self.generation {
            return false;
        }

        match result {
            Ok(front) => {
                self.page = front.page;
                self.selected = self.selected.min(front.stories.len().saturating_sub(1));
                self.view = View::Front(front);
            }
            Err(_) => {
                self.view = View::Error(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn stories(&self) -> &[RankedStory] {
        match &self.view {
            View::Front(front) => &front.stories,
            _ => &[],
        }
    }

    pub fn selected_story(&self) -> Option<&RankedStory> {
        self.stories().get(self.selected)
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.stories().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::GazetteError;
    use crate::domain::Story;

    fn front(page: Page, ids: &[u64]) -> FrontPage {
        let stories = ids
            .iter()
            .enumerate()
            .map(|(i, &id)| RankedStory {
                rank: page.rank(i),
                story: Story {
                    id,
                    title: format!("Story {}", id),
                    url: None,
                    by: "tester".into(),
                    score: 1,
                    time: 0,
                    descendants: None,
                },
            })
            .collect();
        FrontPage { page, stories }
    }

    #[test]
    fn test_begin_load_shows_placeholder_and_bumps_generation() {
        let mut app = TuiApp::new(Page::FIRST);
        let generation = app.begin_load();
        assert_eq!(generation, 1);
        assert!(matches!(app.view, View::Loading));
    }

    #[test]
    fn test_successful_load_commits_the_page() {
        let mut app = TuiApp::new(Page::FIRST);
        let generation = app.begin_load();

        let applied = app.apply_load(generation, Ok(front(Page::new(2), &[1, 2])));
        assert!(applied);
        assert_eq!(app.page, Page::new(2));
        assert!(matches!(app.view, View::Front(_)));
    }

    #[test]
    fn test_failed_load_keeps_the_old_page_and_shows_static_error() {
        let mut app = TuiApp::new(Page::new(3));
        let generation = app.begin_load();

        app.apply_load(generation, Err(GazetteError::Other("boom".into())));
        assert_eq!(app.page, Page::new(3));
        match &app.view {
            View::Error(message) => assert_eq!(message, LOAD_ERROR_MESSAGE),
            other => panic!("expected error view, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut app = TuiApp::new(Page::FIRST);
        let stale = app.begin_load();
        let newest = app.begin_load();

        let applied = app.apply_load(stale, Ok(front(Page::new(2), &[1])));
        assert!(!applied);
        assert!(matches!(app.view, View::Loading));
        assert_eq!(app.page, Page::FIRST);

        assert!(app.apply_load(newest, Ok(front(Page::new(3), &[9]))));
        assert_eq!(app.page, Page::new(3));
    }

    #[test]
    fn test_selection_clamps_to_shorter_pages() {
        let mut app = TuiApp::new(Page::FIRST);
        let generation = app.begin_load();
        app.apply_load(generation, Ok(front(Page::FIRST, &[1, 2, 3, 4, 5])));
        app.selected = 4;

        let generation = app.begin_load();
        app.apply_load(generation, Ok(front(Page::FIRST, &[1, 2])));
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_movement() {
        let mut app = TuiApp::new(Page::FIRST);
        let generation = app.begin_load();
        app.apply_load(generation, Ok(front(Page::FIRST, &[1, 2, 3])));

        app.move_up();
        assert_eq!(app.selected, 0);
        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_selected_story_absent_while_loading() {
        let mut app = TuiApp::new(Page::FIRST);
        app.begin_load();
        assert!(app.selected_story().is_none());
    }
}
