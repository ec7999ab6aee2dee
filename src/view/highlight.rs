use maud::{Markup, html};

use super::layout::avatar;
use crate::state::RankedRow;

/// Top of the ranking shown above the table on wide layouts
pub fn champions(rows: &[RankedRow<'_>]) -> Markup {
    html! {
        section.champions {
            @for row in rows {
                div.zoom data-key=(row.key()) {
                    span.position { (row.rank) "º" }
                    (avatar(&row.player.name, row.player.profile_image_url.as_deref()))
                    span.name { (row.player.name) }
                }
            }
        }
    }
}
