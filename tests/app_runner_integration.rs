mod common;

use std::{sync::Arc, time::Duration};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use profui::{
    core::state::editor::Phase,
    infrastructure::{
        config::Config,
        tui::{self, test::TestTui},
    },
    integration::app_runner::AppRunner,
};
use tokio::sync::Mutex;

use common::ScriptedProfileService;

fn key(code: KeyCode) -> tui::Event {
    tui::Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn runner(events: Vec<tui::Event>) -> (AppRunner, Arc<Mutex<TestTui>>) {
    let test_tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, events).expect("test terminal"),
    ));
    let runner = AppRunner::new(
        Config::default(),
        Arc::new(ScriptedProfileService::new()),
        Arc::clone(&test_tui) as Arc<Mutex<dyn tui::TuiLike + Send>>,
    )
    .expect("runner");
    (runner, test_tui)
}

async fn cycle_until(runner: &mut AppRunner, phase: Phase) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while runner.runtime().state().editor.phase != phase {
            runner.run_one_cycle().await.expect("cycle");
        }
    })
    .await
    .expect("phase reached");
}

#[tokio::test]
async fn test_loaded_profile_is_rendered() {
    let (mut runner, test_tui) = runner(vec![]);
    runner.start().await.expect("start");

    cycle_until(&mut runner, Phase::Viewing).await;

    let lines = test_tui.lock().await.screen_lines();
    assert!(lines.iter().any(|l| l.contains("Jane Doe")));
    assert!(lines.iter().any(|l| l.contains("jane@example.com")));
}

#[tokio::test]
async fn test_edit_key_opens_form_and_escape_closes_it() {
    let (mut runner, test_tui) = runner(vec![]);
    runner.start().await.expect("start");
    cycle_until(&mut runner, Phase::Viewing).await;

    test_tui.lock().await.enqueue_event(key(KeyCode::Char('e')));
    cycle_until(&mut runner, Phase::Editing).await;
    assert!(runner.runtime().state().editor.draft.is_some());

    test_tui.lock().await.enqueue_event(key(KeyCode::Esc));
    cycle_until(&mut runner, Phase::Viewing).await;
    assert!(runner.runtime().state().editor.draft.is_none());
}

#[tokio::test]
async fn test_quit_key_stops_the_loop() {
    let (mut runner, test_tui) = runner(vec![key(KeyCode::Char('q'))]);

    tokio::time::timeout(Duration::from_secs(2), runner.run())
        .await
        .expect("run finishes")
        .expect("run succeeds");

    assert!(runner.runtime().state().system.should_quit);
    assert!(!test_tui.lock().await.is_entered());
}
