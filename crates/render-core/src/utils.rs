use danfe_types::FontWeight;

/// Resource name and base font of the standard face used for `weight`.
pub fn font_for(weight: FontWeight) -> (&'static str, &'static str) {
    match weight {
        FontWeight::Regular => ("F1", "Helvetica"),
        FontWeight::Bold => ("F2", "Helvetica-Bold"),
    }
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Baseline of a text line whose box starts at `top` (layout coordinates).
pub fn baseline(top: f32, size: f32) -> f32 {
    top + size * 0.8
}
