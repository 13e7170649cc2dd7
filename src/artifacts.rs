#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Relative path of the application entry file.
pub const APP_PATH: &str = "src/App.jsx";
/// Relative path of the search bar component.
pub const SEARCH_BAR_PATH: &str = "src/components/SearchBar.jsx";
/// Relative path of the user list component.
pub const USER_LIST_PATH: &str = "src/components/UserList.jsx";
/// Relative path of the user card component.
pub const USER_CARD_PATH: &str = "src/components/UserCard.jsx";
/// Relative path of the user modal component.
pub const USER_MODAL_PATH: &str = "src/components/UserModal.jsx";
/// Relative path of the stylesheet.
pub const INDEX_CSS_PATH: &str = "src/Index.css";

#[derive(Debug, Clone)]
/// A single submitted file held in memory as raw text.
///
/// Absence is a valid state, not an error: a file that is missing or
/// unreadable loads with `content = None` and every check that reads it
/// fails, while the run itself carries on.
pub struct Artifact {
    /// Short name the rubric refers to this file by.
    logical_name: &'static str,
    /// Expected path relative to the submission root.
    rel_path:     &'static str,
    /// Resolved on-disk path the content was read from.
    path:         PathBuf,
    /// File content, or `None` when missing or unreadable.
    content:      Option<String>,
}

impl Artifact {
    /// Reads `rel_path` under `root`, tolerating any failure.
    pub fn load(logical_name: &'static str, rel_path: &'static str, root: &Path) -> Self {
        let path = root.join(rel_path);
        let content = match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(artifact = logical_name, error = %e, "artifact not loaded");
                None
            }
        };
        Self {
            logical_name,
            rel_path,
            path,
            content,
        }
    }

    /// Builds an artifact from already-available text. Used by tests and by
    /// anything that wants to grade content that never touched disk.
    pub fn from_text(
        logical_name: &'static str,
        rel_path: &'static str,
        content: Option<String>,
    ) -> Self {
        Self {
            logical_name,
            rel_path,
            path: PathBuf::from(rel_path),
            content,
        }
    }

    /// Short name the rubric refers to this file by.
    pub fn logical_name(&self) -> &'static str {
        self.logical_name
    }

    /// Expected path relative to the submission root.
    pub fn rel_path(&self) -> &'static str {
        self.rel_path
    }

    /// The loaded text, if any.
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Whether content was loaded. This is what scoring sees.
    pub fn is_present(&self) -> bool {
        self.content.is_some()
    }

    /// Whether the file exists on disk at all. Never errors. Used only to
    /// word feedback messages, never for scoring.
    pub fn exists(&self) -> bool {
        std::fs::metadata(&self.path).is_ok()
    }
}

#[derive(Debug, Clone, Serialize)]
/// Presence snapshot of one expected artifact, carried into the report so
/// feedback can be worded without re-touching the filesystem.
pub struct ArtifactStatus {
    /// Short name the rubric refers to this file by.
    logical_name: &'static str,
    /// Expected path relative to the submission root.
    rel_path:     &'static str,
    /// Whether the file exists on disk.
    exists:       bool,
    /// Whether content was actually loaded.
    present:      bool,
}

impl ArtifactStatus {
    /// Short name the rubric refers to this file by.
    pub fn logical_name(&self) -> &'static str {
        self.logical_name
    }

    /// Expected path relative to the submission root.
    pub fn rel_path(&self) -> &'static str {
        self.rel_path
    }

    /// Whether the file exists on disk.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Whether content was actually loaded.
    pub fn present(&self) -> bool {
        self.present
    }
}

#[derive(Debug, Clone)]
/// The fixed set of submitted files the rubric reads, loaded once and
/// read-only afterwards.
pub struct ArtifactSet {
    /// Application entry file.
    app:        Artifact,
    /// Search bar component.
    search_bar: Artifact,
    /// User list component.
    user_list:  Artifact,
    /// User card component.
    user_card:  Artifact,
    /// User modal component.
    user_modal: Artifact,
    /// Stylesheet.
    index_css:  Artifact,
}

impl ArtifactSet {
    /// Loads every expected file under `root`. Missing or unreadable files
    /// load as absent; this never errors.
    pub fn load(root: &Path) -> Self {
        Self {
            app:        Artifact::load("app", APP_PATH, root),
            search_bar: Artifact::load("search_bar", SEARCH_BAR_PATH, root),
            user_list:  Artifact::load("user_list", USER_LIST_PATH, root),
            user_card:  Artifact::load("user_card", USER_CARD_PATH, root),
            user_modal: Artifact::load("user_modal", USER_MODAL_PATH, root),
            index_css:  Artifact::load("index_css", INDEX_CSS_PATH, root),
        }
    }

    /// A set in which every artifact is absent.
    pub fn absent() -> Self {
        Self {
            app:        Artifact::from_text("app", APP_PATH, None),
            search_bar: Artifact::from_text("search_bar", SEARCH_BAR_PATH, None),
            user_list:  Artifact::from_text("user_list", USER_LIST_PATH, None),
            user_card:  Artifact::from_text("user_card", USER_CARD_PATH, None),
            user_modal: Artifact::from_text("user_modal", USER_MODAL_PATH, None),
            index_css:  Artifact::from_text("index_css", INDEX_CSS_PATH, None),
        }
    }

    /// Returns a copy of this set with the given application entry text.
    pub fn with_app(mut self, text: impl Into<String>) -> Self {
        self.app = Artifact::from_text("app", APP_PATH, Some(text.into()));
        self
    }

    /// Returns a copy of this set with the given search bar text.
    pub fn with_search_bar(mut self, text: impl Into<String>) -> Self {
        self.search_bar = Artifact::from_text("search_bar", SEARCH_BAR_PATH, Some(text.into()));
        self
    }

    /// Returns a copy of this set with the given user list text.
    pub fn with_user_list(mut self, text: impl Into<String>) -> Self {
        self.user_list = Artifact::from_text("user_list", USER_LIST_PATH, Some(text.into()));
        self
    }

    /// Returns a copy of this set with the given user card text.
    pub fn with_user_card(mut self, text: impl Into<String>) -> Self {
        self.user_card = Artifact::from_text("user_card", USER_CARD_PATH, Some(text.into()));
        self
    }

    /// Returns a copy of this set with the given user modal text.
    pub fn with_user_modal(mut self, text: impl Into<String>) -> Self {
        self.user_modal = Artifact::from_text("user_modal", USER_MODAL_PATH, Some(text.into()));
        self
    }

    /// Returns a copy of this set with the given stylesheet text.
    pub fn with_index_css(mut self, text: impl Into<String>) -> Self {
        self.index_css = Artifact::from_text("index_css", INDEX_CSS_PATH, Some(text.into()));
        self
    }

    /// Application entry file.
    pub fn app(&self) -> &Artifact {
        &self.app
    }

    /// Search bar component.
    pub fn search_bar(&self) -> &Artifact {
        &self.search_bar
    }

    /// User list component.
    pub fn user_list(&self) -> &Artifact {
        &self.user_list
    }

    /// User card component.
    pub fn user_card(&self) -> &Artifact {
        &self.user_card
    }

    /// User modal component.
    pub fn user_modal(&self) -> &Artifact {
        &self.user_modal
    }

    /// Stylesheet.
    pub fn index_css(&self) -> &Artifact {
        &self.index_css
    }

    /// Every artifact in fixed declaration order.
    pub fn all(&self) -> [&Artifact; 6] {
        [
            &self.app,
            &self.search_bar,
            &self.user_list,
            &self.user_card,
            &self.user_modal,
            &self.index_css,
        ]
    }

    /// Looks an artifact up by its logical name.
    pub fn by_logical_name(&self, logical_name: &str) -> Option<&Artifact> {
        self.all()
            .into_iter()
            .find(|a| a.logical_name() == logical_name)
    }

    /// Presence snapshot for every artifact, in fixed order.
    pub fn statuses(&self) -> Vec<ArtifactStatus> {
        self.all()
            .into_iter()
            .map(|a| ArtifactStatus {
                logical_name: a.logical_name(),
                rel_path:     a.rel_path(),
                exists:       a.exists(),
                present:      a.is_present(),
            })
            .collect()
    }
}
