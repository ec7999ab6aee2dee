use maud::{Markup, html};

use super::layout::avatar;
use crate::pagination::{NavAction, PageLink, PageSize};
use crate::state::LeaderboardState;

pub const EMPTY_MESSAGE: &str = "Não há jogadores cadastrados no momento";
const PAGE_SIZE_LABEL: &str = "Máx de itens:";
const COLUMN_SPAN: u32 = 6;

pub struct TableView<'a> {
    pub state: &'a LeaderboardState,
    pub wide: bool,
    pub row_height_px: u32,
    pub link: PageLink,
}

pub fn ranking_table(view: &TableView<'_>) -> Markup {
    let state = view.state;
    html! {
        div.table-container.table-wide[view.wide] {
            table aria-label="ranking" {
                thead {
                    tr {
                        th { strong { "RANKING" } }
                        th { strong { "NOME" } }
                        @if view.wide {
                            th { strong { "TORNEIOS JOGADOS" } }
                        }
                        th { strong { "PONTOS" } }
                    }
                }
                tbody {
                    @if state.results().is_empty() {
                        tr {
                            td colspan=(COLUMN_SPAN) { (EMPTY_MESSAGE) }
                        }
                    } @else {
                        @for row in state.rows() {
                            tr data-key=(row.key()) {
                                td.rank { strong { (row.rank) } }
                                td {
                                    div.user-cell {
                                        (avatar(&row.player.name, row.player.profile_image_url.as_deref()))
                                        p { (row.player.name) }
                                    }
                                }
                                @if view.wide {
                                    td { (row.player.tournaments_played) }
                                }
                                td { (row.player.points) }
                            }
                        }
                    }
                    @let padding = state.padding_rows();
                    @if padding > 0 {
                        tr.padding style=(format!("height: {}px", spacer_height(padding, view.row_height_px))) {
                            td colspan=(COLUMN_SPAN) {}
                        }
                    }
                }
                @if state.is_paginated() {
                    tfoot {
                        tr {
                            td colspan=(COLUMN_SPAN) { (pagination_controls(view)) }
                        }
                    }
                }
            }
        }
    }
}

fn spacer_height(padding: usize, row_height_px: u32) -> u64 {
    (padding as u64).saturating_mul(u64::from(row_height_px))
}

fn pagination_controls(view: &TableView<'_>) -> Markup {
    let state = view.state;
    let (from, to) = state.displayed_range();
    html! {
        div.pagination {
            form method="get" action="/" {
                input type="hidden" name="group" value=(state.filter().value());
                @if let Some(width) = view.link.viewport_width {
                    input type="hidden" name="vw" value=(width);
                }
                label for="page-size" { (PAGE_SIZE_LABEL) }
                select #page-size name="page_size" onchange="this.form.submit()" {
                    @for size in PageSize::OPTIONS {
                        option value=(size.value()) selected[size == state.page().page_size()] { (size.label()) }
                    }
                }
            }
            span.summary { (from) "–" (to) " de " (state.results().len()) }
            nav.actions {
                @for action in NavAction::ALL {
                    @match state.nav_target(action) {
                        Some(page) => {
                            a.nav href=(view.link.page_url("/", page)) aria-label=(action.aria_label()) { (action.symbol()) }
                        }
                        None => {
                            span.nav.disabled aria-label=(action.aria_label()) aria-disabled="true" { (action.symbol()) }
                        }
                    }
                }
            }
        }
    }
}
