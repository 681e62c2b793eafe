use std::fmt::Write as _;

use tracker_core::{GridCell, GridState};

/// Static markup for the 10x10 board.
///
/// Tooltips carry user-entered teacher names and notes, so each one is
/// escaped with `ammonia::clean_text` before it lands in a `title`
/// attribute. Cell colors are validated hex and go in unescaped.
#[must_use]
pub fn grid_markup(grid: &GridState) -> String {
    let mut html = String::from(r#"<div class="grid">"#);
    for row in grid.rows() {
        html.push_str(r#"<div class="grid-row">"#);
        for cell in row {
            match cell {
                GridCell::Filled { color, tooltip, .. } => {
                    let _ = write!(
                        html,
                        r#"<div class="cell filled" style="background-color:{color};" title="{}"></div>"#,
                        ammonia::clean_text(tooltip)
                    );
                }
                GridCell::Empty => html.push_str(r#"<div class="cell empty"></div>"#),
            }
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}
