//! UI beep envelope and the audio unlock gate.
//!
//! Browsers only allow audio after a user gesture, so the context is created
//! lazily on the first click and resumed on later clicks if it was suspended.
//!
//! The browser schedules the envelope itself from the [`Beep`] endpoints;
//! `frequency_at` and `gain_at` model the same exponential ramps so the
//! envelope can be checked off the audio thread.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beep {
    pub start_hz: f32,
    pub end_hz: f32,
    pub gain: f32,
    pub gain_floor: f32,
    pub duration_sec: f64,
}

impl Default for Beep {
    fn default() -> Self {
        Self {
            start_hz: BEEP_START_HZ,
            end_hz: BEEP_END_HZ,
            gain: BEEP_GAIN,
            gain_floor: BEEP_GAIN_FLOOR,
            duration_sec: BEEP_DURATION_SEC,
        }
    }
}

#[inline]
fn exp_ramp(from: f32, to: f32, t: f64, duration: f64) -> f32 {
    if duration <= 0.0 {
        return to;
    }
    let u = (t / duration).clamp(0.0, 1.0) as f32;
    from * (to / from).powf(u)
}

impl Beep {
    /// Oscillator frequency `t` seconds after the start, matching an
    /// exponential ramp.
    pub fn frequency_at(&self, t: f64) -> f32 {
        exp_ramp(self.start_hz, self.end_hz, t, self.duration_sec)
    }

    pub fn gain_at(&self, t: f64) -> f32 {
        exp_ramp(self.gain, self.gain_floor, t, self.duration_sec)
    }

    pub fn stop_time(&self, start: f64) -> f64 {
        start + self.duration_sec
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioGate {
    /// No gesture yet; beeps are dropped.
    #[default]
    Locked,
    Running,
    Suspended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    CreateContext,
    Resume,
    None,
}

impl AudioGate {
    /// React to a user gesture.
    pub fn on_gesture(&mut self) -> GateAction {
        match self {
            AudioGate::Locked => {
                *self = AudioGate::Running;
                GateAction::CreateContext
            }
            AudioGate::Suspended => {
                *self = AudioGate::Running;
                GateAction::Resume
            }
            AudioGate::Running => GateAction::None,
        }
    }

    /// The context reported it was suspended by the browser.
    pub fn on_suspended(&mut self) {
        if *self == AudioGate::Running {
            *self = AudioGate::Suspended;
        }
    }

    pub fn can_play(&self) -> bool {
        *self == AudioGate::Running
    }
}
