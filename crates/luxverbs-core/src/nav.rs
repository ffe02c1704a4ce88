use luxverbs_types::{Catalog, Verb, ViewModel};

/// Current navigation focus. At most one of a category or a verb; a chosen
/// verb wins over a chosen category when deriving the view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    None,
    Category(String),
    Verb(i64),
}

/// The navigation state machine. Holds only the Selection; the Catalog is
/// passed in per operation and never mutated from here.
#[derive(Debug, Default)]
pub struct Navigator {
    selection: Selection,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select a category by label. Returns false and leaves the selection
    /// untouched when the label is not in the catalog, so the selection can
    /// never reference an absent category.
    pub fn select_category(&mut self, catalog: &Catalog, label: &str) -> bool {
        if catalog.category(label).is_none() {
            return false;
        }
        self.selection = Selection::Category(label.to_string());
        true
    }

    /// Select a verb by id, reachable both from a category view and from the
    /// home view's flattened list.
    pub fn select_verb(&mut self, catalog: &Catalog, id: i64) -> bool {
        if catalog.verb(id).is_none() {
            return false;
        }
        self.selection = Selection::Verb(id);
        true
    }

    /// "Back" always lands on home, also from a verb detail that was reached
    /// through a category.
    pub fn back(&mut self) {
        self.selection = Selection::None;
    }

    /// Derive the view for the current selection: verb selected renders the
    /// detail, else category selected renders the category list, else home.
    pub fn view(&self, catalog: &Catalog) -> ViewModel {
        match &self.selection {
            Selection::Verb(id) => match catalog.verb(*id) {
                Some(verb) => ViewModel::Detail { verb: verb.clone() },
                None => home_view(catalog),
            },
            Selection::Category(label) => match catalog.category(label) {
                Some(category) => ViewModel::Category {
                    label: category.label.clone(),
                    verbs: category.verbs.clone(),
                },
                None => home_view(catalog),
            },
            Selection::None => home_view(catalog),
        }
    }
}

fn home_view(catalog: &Catalog) -> ViewModel {
    ViewModel::Home {
        categories: catalog.categories.iter().map(|c| c.label.clone()).collect(),
        verbs: alphabetical(catalog),
    }
}

/// Flatten the catalog into one list sorted ascending by headword. Computed
/// fresh on every call, never cached.
pub fn alphabetical(catalog: &Catalog) -> Vec<Verb> {
    let mut verbs: Vec<Verb> = catalog
        .categories
        .iter()
        .flat_map(|c| c.verbs.iter().cloned())
        .collect();
    verbs.sort_by(|a, b| a.lu.cmp(&b.lu));
    verbs
}
