use std::collections::HashMap;

use luxverbs_types::{Catalog, Category, TrustedFragment, Verb};

use crate::records::RawRecord;

impl From<RawRecord> for Verb {
    fn from(record: RawRecord) -> Self {
        Verb {
            id: record.id,
            lu: record.fields.lu,
            en: record.fields.en,
            fr: record.fields.fr,
            de: record.fields.de,
            all: record.fields.all,
            video: TrustedFragment::new(record.fields.video_embed),
        }
    }
}

/// Fold raw records into a catalog, grouped by the `Type` label. Categories
/// appear in first-seen order and keep within-type insertion order; every
/// record lands in exactly one category.
pub fn build_catalog(records: Vec<RawRecord>) -> Catalog {
    let mut categories: Vec<Category> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let label = record.fields.verb_type.clone();
        let slot = *index.entry(label.clone()).or_insert_with(|| {
            categories.push(Category {
                label,
                verbs: Vec::new(),
            });
            categories.len() - 1
        });
        categories[slot].verbs.push(Verb::from(record));
    }

    Catalog { categories }
}
