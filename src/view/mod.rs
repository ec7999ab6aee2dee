mod highlight;
mod layout;
mod selector;
mod table;
mod viewport;

use maud::{Markup, html};

pub use table::EMPTY_MESSAGE;
pub use viewport::{VIEWPORT_WIDTH_HINT, is_wide_layout, viewport_width};

use crate::config::LayoutSettings;
use crate::pagination::PageLink;
use crate::state::LeaderboardState;

/// Full ranking page for the current state
pub fn render_page(state: &LeaderboardState, layout: &LayoutSettings, viewport: Option<u32>) -> Markup {
    let wide = is_wide_layout(viewport, layout.wide_breakpoint_px);
    let link = PageLink {
        group: state.filter(),
        page_size: state.page().page_size(),
        viewport_width: viewport,
    };
    let top = state.top_five();

    let body = html! {
        main {
            @if wide {
                (highlight::champions(&top))
            }
            (layout::banner())
            (selector::group_selector(state.filter(), state.page().page_size(), viewport))
            (table::ranking_table(&table::TableView {
                state,
                wide,
                row_height_px: layout.row_height_px,
                link,
            }))
            (layout::footer())
        }
    };

    layout::document(wide, layout.wide_breakpoint_px, body)
}
