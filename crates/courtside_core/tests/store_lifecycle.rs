use courtside_core::storage::codec::load;
use courtside_core::storage::{MemoryStorage, SqliteStorage};
use courtside_core::{Action, AppStore};

#[test]
fn scoring_scenario_from_a_fresh_install() {
    let mut store = AppStore::open(MemoryStorage::new());

    let blue_id = store.state().teams[0].id.clone();
    let red_id = store.state().teams[1].id.clone();
    assert_eq!(store.state().teams[0].name, "Blue");
    assert_eq!(store.state().teams[1].name, "Red");
    assert_eq!(store.state().point_values, vec![1, 3]);
    assert!(!store.state().auto_sort);

    store.dispatch(Action::CreateEvent {
        id: "e1".to_string(),
        label: "Monday".to_string(),
        date: "2024-01-01".to_string(),
        team_ids: vec![blue_id.clone(), red_id.clone()],
    });
    for (team_id, points) in [(&blue_id, 3), (&red_id, 1), (&blue_id, 1)] {
        store.dispatch(Action::AddScore {
            event_id: "e1".to_string(),
            team_id: team_id.clone(),
            points,
        });
    }

    let event = store.state().event("e1").unwrap();
    assert_eq!(event.total_for(&blue_id), 4);
    assert_eq!(event.total_for(&red_id), 1);

    store.dispatch(Action::UndoScore {
        event_id: "e1".to_string(),
    });

    let event = store.state().event("e1").unwrap();
    assert_eq!(event.total_for(&blue_id), 3);
    assert_eq!(event.total_for(&red_id), 1);
    assert_eq!(event.entries.len(), 2);
}

#[test]
fn every_dispatch_reaches_durable_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("courtside.db");

    {
        let mut store = AppStore::open(SqliteStorage::open(&path).unwrap());
        store.dispatch(Action::AddTeam {
            name: "Orange".to_string(),
        });
        store.dispatch(Action::ToggleAutoSort);
    }

    let storage = SqliteStorage::open(&path).unwrap();
    let state = load(&storage);
    assert_eq!(state.teams.len(), 7);
    assert_eq!(state.teams[6].name, "Orange");
    assert!(state.auto_sort);
}

#[test]
fn reopening_a_store_restores_the_exact_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("courtside.db");

    let expected = {
        let mut store = AppStore::open(SqliteStorage::open(&path).unwrap());
        let green_id = store.state().teams[3].id.clone();
        store.dispatch(Action::CreateEvent {
            id: "e1".to_string(),
            label: "Practice".to_string(),
            date: "2024-02-10".to_string(),
            team_ids: vec![green_id.clone()],
        });
        store.dispatch(Action::AddScore {
            event_id: "e1".to_string(),
            team_id: green_id,
            points: 3,
        });
        store.state().clone()
    };

    let store = AppStore::open(SqliteStorage::open(&path).unwrap());
    assert_eq!(store.state(), &expected);
}

#[test]
fn defensive_no_op_actions_never_disturb_the_store() {
    let mut store = AppStore::open(MemoryStorage::new());
    let before = store.state().clone();

    store.dispatch(Action::AddTeam {
        name: "blue".to_string(),
    });
    store.dispatch(Action::EditEvent {
        event_id: "missing".to_string(),
        label: "x".to_string(),
        date: "y".to_string(),
    });
    store.dispatch(Action::RemoveTeamFromEvent {
        event_id: "missing".to_string(),
        team_id: "missing".to_string(),
    });
    store.dispatch(Action::RemovePointValue { value: 99 });

    assert_eq!(store.state(), &before);
}
