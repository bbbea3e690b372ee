//! Body class derived from the color and lighting settings.

use tokio::sync::watch;
use tracing::debug;

use clipper_common::{LightingPreference, Settings};

use crate::observable::Observable;
use crate::settings::SettingsService;
use crate::subscription::Subscriptions;

/// The host's current appearance. Unlike the user preference this is
/// never `system`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SystemLighting {
    #[default]
    Light,
    Dark,
}

impl SystemLighting {
    pub fn as_str(self) -> &'static str {
        match self {
            SystemLighting::Light => "light",
            SystemLighting::Dark => "dark",
        }
    }
}

/// `"<color>-<lighting>"`, with a `system` preference resolved to the
/// host's lighting.
pub fn body_class(settings: &Settings, system: SystemLighting) -> String {
    let lighting = match settings.lighting {
        LightingPreference::System => system.as_str(),
        explicit => explicit.as_str(),
    };
    format!("{}-{lighting}", settings.color.as_str())
}

pub struct ThemeService {
    settings: Observable<Option<Settings>>,
    system: Observable<SystemLighting>,
    class: Observable<String>,
    subscriptions: Subscriptions,
}

impl ThemeService {
    /// Follow `settings` from now on. Until settings are known the default
    /// color and `system` lighting apply.
    pub fn new(settings: &SettingsService, system: SystemLighting) -> Self {
        let settings = settings.observable();
        let system = Observable::new(system);
        let class = Observable::new(derive(&settings, &system));
        let service = Self {
            settings,
            system,
            class,
            subscriptions: Subscriptions::new(),
        };
        service.follow_settings();
        service
    }

    fn follow_settings(&self) {
        let mut rx = self.settings.subscribe();
        let settings = self.settings.clone();
        let system = self.system.clone();
        let class = self.class.clone();

        self.subscriptions.spawn("theme", async move {
            while rx.changed().await.is_ok() {
                apply(&class, derive(&settings, &system));
            }
        });
    }

    pub fn body_class(&self) -> String {
        self.class.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.class.subscribe()
    }

    pub fn system_lighting(&self) -> SystemLighting {
        self.system.snapshot()
    }

    /// The host switched between light and dark.
    pub fn set_system_lighting(&self, lighting: SystemLighting) {
        self.system.set(lighting);
        apply(&self.class, derive(&self.settings, &self.system));
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.active()
    }

    pub fn teardown(&self) {
        self.subscriptions.teardown();
    }
}

fn derive(settings: &Observable<Option<Settings>>, system: &Observable<SystemLighting>) -> String {
    let system = system.snapshot();
    settings.with(|current| match current {
        Some(settings) => body_class(settings, system),
        None => body_class(&Settings::default(), system),
    })
}

fn apply(class: &Observable<String>, next: String) {
    class.modify(|current| {
        if *current == next {
            return false;
        }
        debug!(from = %current, to = %next, "body class changed");
        *current = next;
        true
    });
}
