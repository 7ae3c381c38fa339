// each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use profui::{
    core::{msg::Msg, state::AppState},
    domain::{Profile, ServiceError},
    infrastructure::{
        config::Config,
        profile_service::{RemoteProfileService, ServiceFuture},
    },
    integration::runtime::Runtime,
};

pub fn jane() -> Profile {
    Profile {
        name: "Jane Doe".into(),
        title: "Senior Developer".into(),
        email: "jane@example.com".into(),
        bio: "Building things on the web since 2010.".into(),
        avatar: "https://example.com/jane.png".into(),
    }
}

/// Service that answers from queued outcomes, falling back to the last
/// profile it served once a queue runs dry.
#[derive(Default)]
pub struct ScriptedProfileService {
    fetches: Mutex<VecDeque<Result<Profile, ServiceError>>>,
    saves: Mutex<VecDeque<Result<Profile, ServiceError>>>,
    delay: Duration,
    fetch_calls: AtomicUsize,
    save_calls: AtomicUsize,
}

impl ScriptedProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn fetch(self, outcome: Result<Profile, ServiceError>) -> Self {
        self.fetches.lock().unwrap().push_back(outcome);
        self
    }

    pub fn save(self, outcome: Result<Profile, ServiceError>) -> Self {
        self.saves.lock().unwrap().push_back(outcome);
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

impl RemoteProfileService for ScriptedProfileService {
    fn fetch_profile(&self) -> ServiceFuture<'_, Profile> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.fetches.lock().unwrap().pop_front();
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            outcome.unwrap_or_else(|| Ok(jane()))
        })
    }

    fn save_profile(&self, candidate: Profile) -> ServiceFuture<'_, Profile> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.saves.lock().unwrap().pop_front();
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            outcome.unwrap_or(Ok(candidate))
        })
    }
}

pub fn runtime_with(config: Config, service: Arc<ScriptedProfileService>) -> Runtime {
    Runtime::new_with_service(
        AppState::new_with_config(config),
        service as Arc<dyn RemoteProfileService>,
    )
}

/// Runs update cycles until `done` holds, failing the test after two seconds.
pub async fn settle(runtime: &mut Runtime, done: impl Fn(&AppState) -> bool) {
    let waited = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            runtime.run_update_cycle().expect("update cycle");
            if done(runtime.state()) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;
    assert!(waited.is_ok(), "state did not settle: {:?}", runtime.state());
}

pub fn send_all(runtime: &mut Runtime, msgs: impl IntoIterator<Item = Msg>) {
    for msg in msgs {
        runtime.send_msg(msg);
    }
}
