//! Example entries for a fresh catalog

use crate::domain::{Category, Collection, Entry, EntryFields, EntryId};

fn seed_entry(id: &str, title: &str, description: &str, image: &str, category: Category) -> Entry {
    Entry::new(
        EntryId::new(id),
        EntryFields {
            title: title.to_string(),
            description: description.to_string(),
            url: "#".to_string(),
            image_url: format!("https://picsum.photos/seed/{}/600/400", image),
            category,
        },
    )
}

/// The three entries a new catalog starts with
pub fn seed_collection() -> Collection {
    let entries = vec![
        seed_entry(
            "1",
            "My Awesome Blog",
            "A personal blog about web development, design, and technology. Updated weekly.",
            "blog",
            Category::Mbti,
        ),
        seed_entry(
            "2",
            "E-commerce Store",
            "An online store selling handcrafted goods. Built with React and Node.js.",
            "store",
            Category::Game,
        ),
        seed_entry(
            "3",
            "Photography Portfolio",
            "A showcase of my landscape and portrait photography from around the world.",
            "portfolio",
            Category::Mbti,
        ),
    ];

    Collection::from_entries(entries).unwrap_or_default()
}
