//! Maps recognized labels onto application actions.
//!
//! The recognizer never performs side effects. A [`Dispatcher`] resolves a
//! [`Label`] to a [`GestureAction`] and hands it to an [`ActionSink`], the
//! capability a host application implements (start recording, place a call).

use crate::pipeline::Label;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureAction {
    StartAudioCapture,
    StartVideoCapture,
    NotifyGuardians,
    AlertPolice,
    Unrecognized,
}

impl GestureAction {
    /// Status line shown to the user when the action fires.
    pub fn message(&self) -> &'static str {
        match self {
            GestureAction::StartAudioCapture => "Audio recording started...",
            GestureAction::StartVideoCapture => "Video recording started...",
            GestureAction::NotifyGuardians => "Emergency call to guardian initiated!",
            GestureAction::AlertPolice => "Alert sent to the nearby police station!",
            GestureAction::Unrecognized => "Gesture not recognized. Try again.",
        }
    }
}

impl fmt::Display for GestureAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GestureAction::StartAudioCapture => "start_audio_capture",
            GestureAction::StartVideoCapture => "start_video_capture",
            GestureAction::NotifyGuardians => "notify_guardians",
            GestureAction::AlertPolice => "alert_police",
            GestureAction::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// Receives actions; implemented by the host application.
pub trait ActionSink: Send + Sync {
    fn perform(&self, action: GestureAction) -> anyhow::Result<()>;
}

/// Writes each action to the log.
#[derive(Debug, Default)]
pub struct LoggingSink;

impl ActionSink for LoggingSink {
    fn perform(&self, action: GestureAction) -> anyhow::Result<()> {
        info!(action = %action, message = action.message(), "Gesture action");
        Ok(())
    }
}

/// Keeps every action it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    actions: Mutex<Vec<GestureAction>>,
}

impl RecordingSink {
    pub fn actions(&self) -> Vec<GestureAction> {
        self.actions.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl ActionSink for RecordingSink {
    fn perform(&self, action: GestureAction) -> anyhow::Result<()> {
        self.actions
            .lock()
            .map_err(|_| anyhow::anyhow!("Recording sink lock poisoned"))?
            .push(action);
        Ok(())
    }
}

/// Label-to-action table plus the sink actions are delivered to.
pub struct Dispatcher<S: ActionSink> {
    actions: HashMap<String, GestureAction>,
    sink: S,
}

impl<S: ActionSink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self {
            actions: HashMap::new(),
            sink,
        }
    }

    /// Table for the reference templates: `<`, `>`, `V`, `^`.
    pub fn reference(sink: S) -> Self {
        Self::new(sink)
            .with_action("<", GestureAction::StartAudioCapture)
            .with_action(">", GestureAction::StartVideoCapture)
            .with_action("V", GestureAction::NotifyGuardians)
            .with_action("^", GestureAction::AlertPolice)
    }

    pub fn with_action(mut self, label: impl Into<String>, action: GestureAction) -> Self {
        self.actions.insert(label.into(), action);
        self
    }

    /// Labels without an entry resolve to [`GestureAction::Unrecognized`].
    pub fn resolve(&self, label: &Label) -> GestureAction {
        label
            .as_template()
            .and_then(|name| self.actions.get(name).copied())
            .unwrap_or(GestureAction::Unrecognized)
    }

    pub fn dispatch(&self, label: &Label) -> anyhow::Result<GestureAction> {
        let action = self.resolve(label);
        if action == GestureAction::Unrecognized && label.is_recognized() {
            warn!(label = %label, "No action mapped for recognized label");
        }
        self.sink.perform(action)?;
        Ok(action)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
