//! Scripted mock session for testing
//!
//! Implements `PageSession` against an in-memory model of the site: element
//! texts, visibility flags, click-driven navigations and new windows.
//! Unregistered locators behave like an expired wait.

use crate::locators::Locator;
use crate::session::traits::PageSession;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// One scripted element
#[derive(Debug, Clone)]
struct MockElement {
    text: String,
    visible: bool,
    clickable: bool,
    click_intercepted: bool,
}

impl MockElement {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            visible: true,
            clickable: true,
            click_intercepted: false,
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    elements: HashMap<String, MockElement>,
    lists: HashMap<String, Vec<String>>,
    titles: HashMap<String, String>,
    click_navigations: HashMap<String, String>,
    click_windows: HashMap<String, String>,
    windows: Vec<String>,
    current_window: usize,
    clicks: Vec<String>,
    hovers: Vec<String>,
    scrolled_to: Vec<String>,
    screenshot_fails: bool,
    closed: bool,
}

/// Scripted `PageSession` backed by an in-memory site model
#[derive(Debug)]
pub struct MockSession {
    state: Mutex<MockState>,
}

impl MockSession {
    /// Create a mock session with one blank window
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                windows: vec!["about:blank".to_string()],
                ..MockState::default()
            }),
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MockState) -> T) -> T {
        let mut state = self.state.lock().expect("mock state poisoned");
        f(&mut state)
    }

    /// Register a visible, clickable element with the given text
    pub fn add_element(&self, locator: &Locator, text: &str) {
        self.with_state(|s| {
            s.elements
                .insert(locator.expression.to_string(), MockElement::new(text));
        });
    }

    /// Remove a previously registered element
    pub fn remove_element(&self, locator: &Locator) {
        self.with_state(|s| {
            s.elements.remove(locator.expression);
        });
    }

    /// Mark an element as present but not visible
    pub fn set_hidden(&self, locator: &Locator) {
        self.with_state(|s| {
            if let Some(el) = s.elements.get_mut(locator.expression) {
                el.visible = false;
            }
        });
    }

    /// Make clicks on an element fail as intercepted
    pub fn set_click_intercepted(&self, locator: &Locator) {
        self.with_state(|s| {
            if let Some(el) = s.elements.get_mut(locator.expression) {
                el.click_intercepted = true;
            }
        });
    }

    /// Register the text list a multi-element locator resolves to
    pub fn add_list(&self, locator: &Locator, texts: &[&str]) {
        self.with_state(|s| {
            s.lists.insert(
                locator.expression.to_string(),
                texts.iter().map(|t| t.to_string()).collect(),
            );
        });
    }

    /// Register the title served at a URL
    pub fn set_title(&self, url: &str, title: &str) {
        self.with_state(|s| {
            s.titles.insert(url.to_string(), title.to_string());
        });
    }

    /// Clicking the element navigates the current window to `url`
    pub fn on_click_navigate(&self, locator: &Locator, url: &str) {
        self.with_state(|s| {
            s.click_navigations
                .insert(locator.expression.to_string(), url.to_string());
        });
    }

    /// Clicking the element opens a new window at `url`
    pub fn on_click_open_window(&self, locator: &Locator, url: &str) {
        self.with_state(|s| {
            s.click_windows
                .insert(locator.expression.to_string(), url.to_string());
        });
    }

    /// Make screenshot capture fail
    pub fn fail_screenshots(&self) {
        self.with_state(|s| s.screenshot_fails = true);
    }

    /// Locator expressions clicked so far, in order
    pub fn clicks(&self) -> Vec<String> {
        self.with_state(|s| s.clicks.clone())
    }

    /// Locator expressions hovered so far, in order
    pub fn hovers(&self) -> Vec<String> {
        self.with_state(|s| s.hovers.clone())
    }

    /// Locator expressions scrolled into view so far, in order
    pub fn scrolled_to(&self) -> Vec<String> {
        self.with_state(|s| s.scrolled_to.clone())
    }

    fn lookup(state: &MockState, locator: &Locator) -> Result<MockElement> {
        state
            .elements
            .get(locator.expression)
            .cloned()
            .ok_or_else(|| Error::element_timeout(format!("{} not present", locator)))
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageSession for MockSession {
    async fn goto(&self, url: &str) -> Result<()> {
        self.with_state(|s| {
            let window = s.current_window;
            s.windows[window] = url.to_string();
        });
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        self.with_state(|s| Ok(s.windows[s.current_window].clone()))
    }

    async fn title(&self) -> Result<String> {
        self.with_state(|s| {
            let url = &s.windows[s.current_window];
            Ok(s.titles.get(url).cloned().unwrap_or_default())
        })
    }

    async fn wait_visible(&self, locator: &Locator) -> Result<()> {
        self.with_state(|s| {
            let element = Self::lookup(s, locator)?;
            if element.visible {
                Ok(())
            } else {
                Err(Error::element_timeout(format!("{} not visible", locator)))
            }
        })
    }

    async fn wait_clickable(&self, locator: &Locator) -> Result<()> {
        self.with_state(|s| {
            let element = Self::lookup(s, locator)?;
            if element.visible && element.clickable {
                Ok(())
            } else {
                Err(Error::element_timeout(format!("{} not clickable", locator)))
            }
        })
    }

    async fn is_displayed(&self, locator: &Locator) -> Result<bool> {
        self.with_state(|s| {
            Ok(s.elements
                .get(locator.expression)
                .map(|e| e.visible)
                .unwrap_or(false))
        })
    }

    async fn text_of(&self, locator: &Locator) -> Result<String> {
        self.with_state(|s| {
            let element = Self::lookup(s, locator)?;
            if !element.visible || !element.clickable {
                return Err(Error::element_timeout(format!("{} not clickable", locator)));
            }
            Ok(element.text)
        })
    }

    async fn texts_of_all(&self, locator: &Locator) -> Result<Vec<String>> {
        self.with_state(|s| {
            s.lists
                .get(locator.expression)
                .cloned()
                .ok_or_else(|| Error::element_timeout(format!("{} not present", locator)))
        })
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        self.with_state(|s| {
            let element = Self::lookup(s, locator)?;
            if !element.visible || !element.clickable {
                return Err(Error::element_timeout(format!("{} not clickable", locator)));
            }
            if element.click_intercepted {
                return Err(Error::element_interaction(format!(
                    "{}: click intercepted",
                    locator
                )));
            }

            s.clicks.push(locator.expression.to_string());

            if let Some(url) = s.click_navigations.get(locator.expression).cloned() {
                let window = s.current_window;
                s.windows[window] = url;
            }
            if let Some(url) = s.click_windows.get(locator.expression).cloned() {
                s.windows.push(url);
            }
            Ok(())
        })
    }

    async fn hover(&self, locator: &Locator) -> Result<()> {
        self.with_state(|s| {
            let element = Self::lookup(s, locator)?;
            if !element.visible {
                return Err(Error::element_timeout(format!("{} not visible", locator)));
            }
            s.hovers.push(locator.expression.to_string());
            Ok(())
        })
    }

    async fn scroll_into_view(&self, locator: &Locator) -> Result<()> {
        self.with_state(|s| {
            Self::lookup(s, locator)?;
            s.scrolled_to.push(locator.expression.to_string());
            Ok(())
        })
    }

    async fn scroll_by(&self, _pixels: i64) -> Result<()> {
        Ok(())
    }

    async fn window_count(&self) -> Result<usize> {
        self.with_state(|s| Ok(s.windows.len()))
    }

    async fn switch_to_newest_window(&self) -> Result<()> {
        self.with_state(|s| {
            s.current_window = s.windows.len() - 1;
            Ok(())
        })
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        self.with_state(|s| {
            if s.screenshot_fails {
                Err(Error::screenshot("mock capture failure"))
            } else {
                // Minimal PNG signature followed by filler bytes
                Ok(vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00])
            }
        })
    }

    async fn quit(&self) -> Result<()> {
        self.with_state(|s| s.closed = true);
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.with_state(|s| !s.closed)
    }
}
