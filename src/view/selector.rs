use maud::{Markup, html};

use crate::domain::GroupFilter;
use crate::pagination::PageSize;

/// Group select. Submitting keeps the page size and starts again at the first page.
pub fn group_selector(current: GroupFilter, page_size: PageSize, viewport_width: Option<u32>) -> Markup {
    html! {
        form.select-category method="get" action="/" {
            label for="group-select" { "Ranking por Grupos" }
            select #group-select name="group" onchange="this.form.submit()" {
                @for group in GroupFilter::ALL {
                    option value=(group.value()) selected[group == current] { (group.label()) }
                }
            }
            @if page_size != PageSize::default() {
                input type="hidden" name="page_size" value=(page_size.value());
            }
            @if let Some(width) = viewport_width {
                input type="hidden" name="vw" value=(width);
            }
            noscript { button type="submit" { "OK" } }
        }
    }
}
