//! Terminal front-end for the Courtside store.
//!
//! # Responsibility
//! - Translate argv commands into store dispatches and render snapshots.
//! - Keep all display-only logic (ranking, emoji colors) out of core.

mod emoji;

use courtside_core::{
    default_log_level, init_logging, new_id, Action, AppState, AppStore, SportEvent,
    SqliteStorage,
};
use emoji::color_to_emoji;
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: courtside <command>

  teams                                list teams
  events                               list events (default command)
  show <event>                         standings for one event
  add-team <name>                      add a team
  new-event <label> <date> <team>...   create an event with a roster
  score <event> <team> <points>        award points
  undo <event>                         undo the last score in an event
  toggle-sort                          flip auto-sort ranking

  <event> matches an event id or label, <team> a team name.
  Database path comes from COURTSIDE_DB (default ./courtside.db).";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("courtside: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    if let Ok(log_dir) = env::var("COURTSIDE_LOG_DIR") {
        init_logging(default_log_level(), &log_dir)?;
    }

    let db_path = env::var("COURTSIDE_DB").unwrap_or_else(|_| "courtside.db".to_string());
    let storage = SqliteStorage::open(&db_path)
        .map_err(|err| format!("cannot open storage at `{db_path}`: {err}"))?;
    let mut store = AppStore::open(storage);

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        [] | ["events"] => {
            print_events(store.state());
            Ok(())
        }
        ["teams"] => {
            print_teams(store.state());
            Ok(())
        }
        ["show", event] => {
            let event_id = resolve_event(store.state(), event)?;
            print_standings(store.state(), &event_id);
            Ok(())
        }
        ["add-team", name] => {
            if store.state().name_taken(name, None) {
                return Err(format!("a team named `{name}` already exists"));
            }
            store.dispatch(Action::AddTeam {
                name: (*name).to_string(),
            });
            print_teams(store.state());
            Ok(())
        }
        ["new-event", label, date, teams @ ..] => {
            let team_ids = teams
                .iter()
                .map(|name| resolve_team(store.state(), name))
                .collect::<Result<Vec<_>, _>>()?;
            let id = new_id();
            store.dispatch(Action::CreateEvent {
                id: id.clone(),
                label: (*label).to_string(),
                date: (*date).to_string(),
                team_ids,
            });
            println!("created event {id}");
            print_standings(store.state(), &id);
            Ok(())
        }
        ["score", event, team, points] => {
            let event_id = resolve_event(store.state(), event)?;
            let team_id = resolve_team(store.state(), team)?;
            let points: i64 = points
                .parse()
                .map_err(|_| format!("`{points}` is not a point count"))?;
            store.dispatch(Action::AddScore {
                event_id: event_id.clone(),
                team_id,
                points,
            });
            print_standings(store.state(), &event_id);
            Ok(())
        }
        ["undo", event] => {
            let event_id = resolve_event(store.state(), event)?;
            store.dispatch(Action::UndoScore {
                event_id: event_id.clone(),
            });
            print_standings(store.state(), &event_id);
            Ok(())
        }
        ["toggle-sort"] => {
            store.dispatch(Action::ToggleAutoSort);
            println!(
                "auto-sort is now {}",
                if store.state().auto_sort { "on" } else { "off" }
            );
            Ok(())
        }
        _ => Err(USAGE.to_string()),
    }
}

fn resolve_team(state: &AppState, name: &str) -> Result<String, String> {
    state
        .teams
        .iter()
        .find(|team| team.name.eq_ignore_ascii_case(name))
        .map(|team| team.id.clone())
        .ok_or_else(|| format!("no team named `{name}`"))
}

fn resolve_event(state: &AppState, needle: &str) -> Result<String, String> {
    state
        .events
        .iter()
        .find(|event| event.id == needle || event.label.eq_ignore_ascii_case(needle))
        .map(|event| event.id.clone())
        .ok_or_else(|| format!("no event matching `{needle}`"))
}

fn print_teams(state: &AppState) {
    for team in &state.teams {
        println!("{} {} ({})", color_to_emoji(&team.color), team.name, team.color);
    }
}

fn print_events(state: &AppState) {
    if state.events.is_empty() {
        println!("no events yet");
        return;
    }
    for event in &state.events {
        println!(
            "{}  {} [{} teams, {} scores]",
            event.date,
            event.label,
            event.team_ids.len(),
            event.entries.len()
        );
    }
}

fn print_standings(state: &AppState, event_id: &str) {
    let Some(event) = state.event(event_id) else {
        return;
    };
    println!("{} ({})", event.label, event.date);
    for team_id in display_order(state, event) {
        let Some(team) = state.team(&team_id) else {
            continue;
        };
        println!(
            "  {} {:<12} {:>4}",
            color_to_emoji(&team.color),
            team.name,
            event.total_for(&team_id)
        );
    }
}

/// Roster order, or descending totals when auto-sort is on.
fn display_order(state: &AppState, event: &SportEvent) -> Vec<String> {
    if state.auto_sort {
        event.ranked_team_ids()
    } else {
        event.team_ids.clone()
    }
}
