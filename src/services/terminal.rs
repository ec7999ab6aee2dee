use anyhow::{Context, Result};
use colored::Colorize;
use log::warn;

use crate::api::handlers::AppState;
use crate::api::PlayersApiClient;
use crate::config::AppConfig;
use crate::domain::GroupFilter;
use crate::pagination::PageSize;
use crate::state::LeaderboardState;
use crate::view::EMPTY_MESSAGE;

/// Prints one page of a group's ranking to stdout
pub struct TerminalService {
    config: AppConfig,
}

impl TerminalService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self, group: &str, page: usize, page_size: PageSize) -> Result<()> {
        let group = GroupFilter::parse(Some(group)).context("Invalid --group")?;

        let source = PlayersApiClient::new(&self.config.api)?;
        let app = AppState::new(source, self.config.clone());
        let state = app.load_state(group, page_size, page).await;

        if let Some(error) = state.last_error() {
            warn!("Ranking could not be refreshed: {}", error);
        }

        println!("{}", render_lines(&state).join("\n"));
        Ok(())
    }
}

fn render_lines(state: &LeaderboardState) -> Vec<String> {
    let mut lines = vec![format!("{}", state.filter().label().bold())];

    if state.results().is_empty() {
        lines.push(EMPTY_MESSAGE.dimmed().to_string());
        return lines;
    }

    lines.push(format!("{:>4}  {:<32} {:>9} {:>7}", "#", "NOME", "TORNEIOS", "PONTOS"));
    for row in state.rows() {
        let rank = format!("{:>4}", row.rank);
        let rank = match row.rank {
            1 => rank.yellow().bold(),
            2..=5 => rank.cyan(),
            _ => rank.normal(),
        };
        lines.push(format!(
            "{}  {:<32} {:>9} {:>7}",
            rank, row.player.name, row.player.tournaments_played, row.player.points
        ));
    }

    if state.is_paginated() {
        let (from, to) = state.displayed_range();
        lines.push(format!(
            "{}–{} de {} (página {} de {})",
            from,
            to,
            state.results().len(),
            state.page().page_index() + 1,
            state.page_count()
        ));
    }
    lines
}
