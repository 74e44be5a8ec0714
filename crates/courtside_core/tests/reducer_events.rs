use courtside_core::{default_state, reduce, Action, AppState, Id};

fn state_with_event(event_id: &str, team_count: usize) -> (AppState, Vec<Id>) {
    let state = default_state();
    let team_ids: Vec<Id> = state
        .teams
        .iter()
        .take(team_count)
        .map(|team| team.id.clone())
        .collect();
    let state = reduce(
        state,
        Action::CreateEvent {
            id: event_id.to_string(),
            label: "Monday".to_string(),
            date: "2024-01-01".to_string(),
            team_ids: team_ids.clone(),
        },
    );
    (state, team_ids)
}

fn score(state: AppState, event_id: &str, team_id: &str, points: i64) -> AppState {
    reduce(
        state,
        Action::AddScore {
            event_id: event_id.to_string(),
            team_id: team_id.to_string(),
            points,
        },
    )
}

#[test]
fn create_event_prepends_with_empty_entries() {
    let (state, team_ids) = state_with_event("e1", 2);
    let state = reduce(
        state,
        Action::CreateEvent {
            id: "e2".to_string(),
            label: "Tuesday".to_string(),
            date: "2024-01-02".to_string(),
            team_ids: Vec::new(),
        },
    );

    assert_eq!(state.events.len(), 2);
    assert_eq!(state.events[0].id, "e2");
    assert_eq!(state.events[1].id, "e1");
    assert!(state.events[1].entries.is_empty());
    assert_eq!(state.events[1].team_ids, team_ids);
    assert!(state.events[1].created_at > 0);
}

#[test]
fn edit_event_overwrites_label_and_date_only() {
    let (state, team_ids) = state_with_event("e1", 2);
    let state = reduce(
        state,
        Action::EditEvent {
            event_id: "e1".to_string(),
            label: "Monday Night".to_string(),
            date: "2024-01-08".to_string(),
        },
    );

    let event = state.event("e1").unwrap();
    assert_eq!(event.label, "Monday Night");
    assert_eq!(event.date, "2024-01-08");
    assert_eq!(event.team_ids, team_ids);
}

#[test]
fn edit_of_unknown_event_changes_nothing() {
    let (state, _) = state_with_event("e1", 1);
    let before = state.clone();
    let state = reduce(
        state,
        Action::EditEvent {
            event_id: "nope".to_string(),
            label: "x".to_string(),
            date: "y".to_string(),
        },
    );
    assert_eq!(state, before);
}

#[test]
fn delete_event_removes_it_and_only_it() {
    let (state, _) = state_with_event("e1", 2);
    let state = reduce(
        state,
        Action::CreateEvent {
            id: "e2".to_string(),
            label: "Tuesday".to_string(),
            date: "2024-01-02".to_string(),
            team_ids: Vec::new(),
        },
    );
    let state = reduce(
        state,
        Action::DeleteEvent {
            event_id: "e1".to_string(),
        },
    );

    assert_eq!(state.events.len(), 1);
    assert_eq!(state.events[0].id, "e2");
    // Teams survive event deletion.
    assert_eq!(state.teams.len(), 6);
}

#[test]
fn add_team_to_event_refuses_duplicates_and_unknown_ids() {
    let (state, team_ids) = state_with_event("e1", 1);
    let extra = state.teams[3].id.clone();

    let state = reduce(
        state,
        Action::AddTeamToEvent {
            event_id: "e1".to_string(),
            team_id: extra.clone(),
        },
    );
    assert_eq!(state.event("e1").unwrap().team_ids.len(), 2);

    // Already in the event.
    let before = state.clone();
    let state = reduce(
        state,
        Action::AddTeamToEvent {
            event_id: "e1".to_string(),
            team_id: team_ids[0].clone(),
        },
    );
    assert_eq!(state, before);

    // Unknown team id never enters a roster.
    let state = reduce(
        state,
        Action::AddTeamToEvent {
            event_id: "e1".to_string(),
            team_id: "not-a-team".to_string(),
        },
    );
    assert_eq!(state, before);

    // Unknown event.
    let state = reduce(
        state,
        Action::AddTeamToEvent {
            event_id: "nope".to_string(),
            team_id: extra,
        },
    );
    assert_eq!(state, before);
}

#[test]
fn remove_team_from_event_cascades_its_entries_in_that_event_only() {
    let (state, team_ids) = state_with_event("e1", 2);
    let (blue, red) = (team_ids[0].clone(), team_ids[1].clone());
    let state = reduce(
        state,
        Action::CreateEvent {
            id: "e2".to_string(),
            label: "Tuesday".to_string(),
            date: "2024-01-02".to_string(),
            team_ids: vec![blue.clone()],
        },
    );

    let state = score(state, "e1", &blue, 3);
    let state = score(state, "e1", &red, 1);
    let state = score(state, "e2", &blue, 2);

    let state = reduce(
        state,
        Action::RemoveTeamFromEvent {
            event_id: "e1".to_string(),
            team_id: blue.clone(),
        },
    );

    let monday = state.event("e1").unwrap();
    assert!(!monday.team_ids.contains(&blue));
    assert!(monday.entries.iter().all(|entry| entry.team_id != blue));
    assert_eq!(monday.total_for(&red), 1);

    // The team entity and its entries in the other event are untouched.
    assert!(state.team(&blue).is_some());
    assert_eq!(state.event("e2").unwrap().total_for(&blue), 2);
}

#[test]
fn add_score_appends_and_ignores_unknown_events() {
    let (state, team_ids) = state_with_event("e1", 1);
    let team = team_ids[0].clone();

    let state = score(state, "e1", &team, 3);
    let entries = &state.event("e1").unwrap().entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].team_id, team);
    assert_eq!(entries[0].points, 3);
    assert!(!entries[0].id.is_empty());
    assert!(entries[0].timestamp > 0);

    let before = state.clone();
    let state = score(state, "nope", &team, 3);
    assert_eq!(state, before);
}

#[test]
fn undo_score_pops_exactly_the_most_recent_entry() {
    let (state, team_ids) = state_with_event("e1", 2);
    let (blue, red) = (team_ids[0].clone(), team_ids[1].clone());

    let state = score(state, "e1", &blue, 3);
    let state = score(state, "e1", &red, 1);
    let snapshot = state.event("e1").unwrap().entries.clone();

    let state = score(state, "e1", &blue, 1);
    let state = reduce(
        state,
        Action::UndoScore {
            event_id: "e1".to_string(),
        },
    );

    assert_eq!(state.event("e1").unwrap().entries, snapshot);
}

#[test]
fn undo_score_on_empty_event_is_a_no_op() {
    let (state, _) = state_with_event("e1", 1);
    let before = state.clone();

    let state = reduce(
        state,
        Action::UndoScore {
            event_id: "e1".to_string(),
        },
    );
    assert_eq!(state, before);

    let state = reduce(
        state,
        Action::UndoScore {
            event_id: "nope".to_string(),
        },
    );
    assert_eq!(state, before);
}
