use serde::{Deserialize, Serialize};

/// One verb entry as loaded from the Grist table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verb {
    /// Row id assigned by Grist
    pub id: i64,
    /// Luxembourgish headword
    pub lu: String,
    pub en: String,
    pub fr: String,
    pub de: String,
    /// Free-form usage notes and conjugation text
    pub all: String,
    pub video: TrustedFragment,
}

/// Externally-sourced HTML that is passed through to the presentation layer
/// verbatim. Everything that renders one of these goes through an explicit
/// capability in the UI, never plain string interpolation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedFragment(String);

impl TrustedFragment {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_raw(&self) -> &str {
        &self.0
    }
}

/// A named grouping of verbs sharing a `Type` label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub verbs: Vec<Verb>,
}

/// Full set of categories produced by one load cycle. Written exactly once
/// by the loader (or left empty on failure), read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn verb_count(&self) -> usize {
        self.categories.iter().map(|c| c.verbs.len()).sum()
    }

    pub fn category(&self, label: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.label == label)
    }

    pub fn verb(&self, id: i64) -> Option<&Verb> {
        self.categories
            .iter()
            .flat_map(|c| c.verbs.iter())
            .find(|v| v.id == id)
    }
}

/// User interactions coming out of the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SelectCategory(String),
    SelectVerb(i64),
    Back,
    Quit,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Ui(UiEvent),
    /// Sent once by the loader task when the fetch succeeds.
    CatalogLoaded(Catalog),
}

/// What the rendering surface shows. Derived from Selection + Catalog on
/// every event; the home verb list is recomputed each time, never cached.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Home {
        categories: Vec<String>,
        verbs: Vec<Verb>,
    },
    Category {
        label: String,
        verbs: Vec<Verb>,
    },
    Detail {
        verb: Verb,
    },
}

impl ViewModel {
    /// The back control is shown on every view except home.
    pub fn shows_back(&self) -> bool {
        !matches!(self, ViewModel::Home { .. })
    }
}
