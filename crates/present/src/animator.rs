use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Animator-agnostic interface. Animation backends implement this trait.
///
/// Parameters are addressed by name, the way animation state machines expose
/// them. Triggers latch until consumed or reset.
pub trait Animator {
    fn set_trigger(&mut self, name: &str);
    fn reset_trigger(&mut self, name: &str);
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_float(&mut self, name: &str, value: f32);
}

/// Current value of one animator parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimValue {
    Trigger(bool),
    Bool(bool),
    Float(f32),
}

/// One call made on an [`Animator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnimCall {
    SetTrigger(String),
    ResetTrigger(String),
    SetBool(String, bool),
    SetFloat(String, f32),
}

/// Animator that keeps parameter state and the ordered call log.
///
/// Useful for CLI output, logging, and testing the presentation mapping.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnimator {
    params: BTreeMap<String, AnimValue>,
    calls: Vec<AnimCall>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<AnimValue> {
        self.params.get(name).copied()
    }

    /// True if the trigger is latched.
    pub fn is_triggered(&self, name: &str) -> bool {
        matches!(self.get(name), Some(AnimValue::Trigger(true)))
    }

    pub fn calls(&self) -> &[AnimCall] {
        &self.calls
    }

    pub fn drain_calls(&mut self) -> Vec<AnimCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of times `name` was set as a trigger.
    pub fn trigger_count(&self, name: &str) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, AnimCall::SetTrigger(n) if n == name))
            .count()
    }

    /// Human-readable dump of every parameter, one per line.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.params {
            let line = match value {
                AnimValue::Trigger(on) => format!("  {name}: trigger({on})\n"),
                AnimValue::Bool(b) => format!("  {name}: {b}\n"),
                AnimValue::Float(f) => format!("  {name}: {f:.2}\n"),
            };
            out.push_str(&line);
        }
        out
    }
}

impl Animator for RecordingAnimator {
    fn set_trigger(&mut self, name: &str) {
        self.params.insert(name.to_owned(), AnimValue::Trigger(true));
        self.calls.push(AnimCall::SetTrigger(name.to_owned()));
    }

    fn reset_trigger(&mut self, name: &str) {
        self.params.insert(name.to_owned(), AnimValue::Trigger(false));
        self.calls.push(AnimCall::ResetTrigger(name.to_owned()));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.params.insert(name.to_owned(), AnimValue::Bool(value));
        self.calls.push(AnimCall::SetBool(name.to_owned(), value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.params.insert(name.to_owned(), AnimValue::Float(value));
        self.calls.push(AnimCall::SetFloat(name.to_owned(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_latch_and_reset() {
        let mut anim = RecordingAnimator::new();
        anim.set_trigger("Jump");
        assert!(anim.is_triggered("Jump"));
        anim.reset_trigger("Jump");
        assert!(!anim.is_triggered("Jump"));
        assert_eq!(anim.trigger_count("Jump"), 1);
        assert_eq!(anim.calls().len(), 2);
    }

    #[test]
    fn summary_lists_params_in_name_order() {
        let mut anim = RecordingAnimator::new();
        anim.set_float("RunSpeed", 0.5);
        anim.set_bool("Running", true);
        let summary = anim.summary();
        assert!(summary.contains("RunSpeed: 0.50"));
        assert!(summary.contains("Running: true"));
        assert!(summary.find("RunSpeed").unwrap() < summary.find("Running").unwrap());
    }

    #[test]
    fn drain_calls_clears_log_but_keeps_state() {
        let mut anim = RecordingAnimator::new();
        anim.set_bool("Running", true);
        assert_eq!(anim.drain_calls().len(), 1);
        assert!(anim.calls().is_empty());
        assert_eq!(anim.get("Running"), Some(AnimValue::Bool(true)));
    }
}
