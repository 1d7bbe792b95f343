use danfe::Page;
use lopdf::{Document as LopdfDocument, Object};

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Base fonts declared in any resource dictionary, sorted.
pub fn font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut names = Vec::new();
    for object in doc.objects.values() {
        let Ok(resources) = object.as_dict() else {
            continue;
        };
        let Ok(fonts) = resources.get(b"Font").and_then(Object::as_dict) else {
            continue;
        };
        for (_, font) in fonts.iter() {
            if let Ok(base) = font
                .as_dict()
                .and_then(|f| f.get(b"BaseFont"))
                .and_then(Object::as_name)
            {
                names.push(String::from_utf8_lossy(base).to_string());
            }
        }
    }
    names.sort();
    names.dedup();
    names
}

/// Item codes drawn on each layout page, in drawing order.
pub fn item_codes_per_page(pages: &[Page]) -> Vec<Vec<String>> {
    pages
        .iter()
        .map(|page| {
            page.texts()
                .filter(|t| t.starts_with("SKU-"))
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// `FOLHA n/total` captions of each page.
pub fn sheet_captions(pages: &[Page]) -> Vec<String> {
    pages
        .iter()
        .flat_map(|page| page.texts().filter(|t| t.starts_with("FOLHA ")))
        .map(str::to_string)
        .collect()
}
