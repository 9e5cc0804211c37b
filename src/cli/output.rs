//! Output formatting utilities

use crate::domain::{Category, CategoryFilter, Entry};

/// Shown in place of a missing image
const FALLBACK_IMAGE_URL: &str = "https://picsum.photos/600/400";

/// Format a list of websites for display
pub fn format_entry_list(entries: &[&Entry], filter: &CategoryFilter) -> String {
    if entries.is_empty() {
        return match filter {
            CategoryFilter::All => {
                "No websites found. Use 'folio add' to add your first website.".to_string()
            }
            CategoryFilter::Only(category) => format!(
                "No websites in '{}' category. Pick another category or add one with 'folio add --category {}'.",
                category, category
            ),
        };
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  [{}]  {}  <{}>\n",
            entry.id, entry.category, entry.title, entry.url
        ));
    }
    output
}

/// Format every field of one website
pub fn format_entry_detail(entry: &Entry) -> String {
    let image = if entry.has_image() {
        entry.image_url.as_str()
    } else {
        FALLBACK_IMAGE_URL
    };

    format!(
        "id:          {}\n\
         title:       {}\n\
         category:    {}\n\
         url:         {}\n\
         image:       {}\n\
         description: {}\n",
        entry.id, entry.title, entry.category, entry.url, image, entry.description
    )
}

/// Format per-category counts, followed by the total
pub fn format_category_counts(counts: &[(Category, usize)]) -> String {
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    let mut output = format!("{:<6} {}\n", "all", total);
    for (category, count) in counts {
        output.push_str(&format!("{:<6} {}\n", category.label(), count));
    }
    output
}
