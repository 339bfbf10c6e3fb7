//! Editor highlighting
//!
//! Turns the classifier's span stream into an egui `LayoutJob`. Runs on
//! the UI thread on every frame the editor lays out, which is fine: the
//! classifier is a single pass over the buffer with no allocation beyond
//! the span vector.

use eframe::egui::text::LayoutJob;
use eframe::egui::{Color32, FontId, TextFormat};

use bloodstudio::models::TokenCategory;
use bloodstudio::syntax::classify;

/// Colors for syntax highlighting (dark theme)
mod colors {
    use eframe::egui::Color32;

    pub const COMMENT: Color32 = Color32::from_rgb(128, 140, 140); // Gray
    pub const STRING: Color32 = Color32::from_rgb(184, 215, 140); // Green
    pub const NUMBER: Color32 = Color32::from_rgb(209, 173, 140); // Orange
    pub const KEYWORD: Color32 = Color32::from_rgb(219, 140, 194); // Pink/purple
    pub const TYPE: Color32 = Color32::from_rgb(230, 204, 140); // Yellow
    pub const IO: Color32 = Color32::from_rgb(140, 191, 230); // Blue
    pub const LOGICAL: Color32 = Color32::from_rgb(140, 204, 204); // Cyan
    pub const BOOLEAN: Color32 = Color32::from_rgb(209, 173, 140); // Orange (same as number)
    pub const OPERATOR: Color32 = Color32::from_rgb(204, 204, 230); // Light blue-gray
    pub const PUNCTUATION: Color32 = Color32::from_rgb(179, 179, 179); // Gray
    pub const IDENTIFIER: Color32 = Color32::from_rgb(217, 217, 217); // Light gray
    pub const DEFAULT: Color32 = Color32::from_rgb(230, 230, 230); // White-ish
}

fn color_for(category: TokenCategory) -> Color32 {
    use TokenCategory::*;
    match category {
        Comment => colors::COMMENT,
        StringLiteral => colors::STRING,
        NumberLiteral => colors::NUMBER,
        CycleKeyword | DeclarationKeyword | ConditionKeyword | BreakKeyword | VectorKeyword => {
            colors::KEYWORD
        }
        TypeKeyword => colors::TYPE,
        IoKeyword => colors::IO,
        LogicalOperatorKeyword => colors::LOGICAL,
        BooleanLiteral => colors::BOOLEAN,
        Operator => colors::OPERATOR,
        Bracket => colors::PUNCTUATION,
        Identifier => colors::IDENTIFIER,
        Whitespace | Unknown => colors::DEFAULT,
    }
}

/// Build the layout job for the editor's current text.
pub(crate) fn layout_job(text: &str, font_size: f32) -> LayoutJob {
    let font_id = FontId::monospace(font_size);
    let mut job = LayoutJob::default();

    for token in classify(text) {
        job.append(
            &token.text,
            0.0,
            TextFormat {
                font_id: font_id.clone(),
                color: color_for(token.category),
                ..Default::default()
            },
        );
    }

    job
}
