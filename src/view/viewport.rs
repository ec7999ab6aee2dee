use axum::http::HeaderMap;

/// Client hint carrying the layout viewport width in CSS pixels
pub const VIEWPORT_WIDTH_HINT: &str = "Sec-CH-Viewport-Width";

/// Wide layout shows the highlight strip and the tournaments column
pub fn is_wide_layout(width: Option<u32>, breakpoint: u32) -> bool {
    width.is_none_or(|w| w >= breakpoint)
}

/// Viewport width from the `vw` query parameter, falling back to the client hint
pub fn viewport_width(query_width: Option<u32>, headers: &HeaderMap) -> Option<u32> {
    query_width.or_else(|| {
        headers
            .get(VIEWPORT_WIDTH_HINT)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|w| w.is_finite() && *w >= 0.0)
            .map(|w| w.round() as u32)
    })
}
