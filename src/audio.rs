use fx_core::{AudioGate, Beep, GateAction};
use web_sys as web;

/// Short synthesized UI sounds.
///
/// Nothing is created until [`SoundFx::unlock`] runs from a user gesture.
#[derive(Default)]
pub struct SoundFx {
    gate: AudioGate,
    ctx: Option<web::AudioContext>,
    beep: Beep,
}

impl SoundFx {
    pub fn unlock(&mut self) {
        self.sync_state();
        match self.gate.on_gesture() {
            GateAction::CreateContext => match web::AudioContext::new() {
                Ok(ctx) => {
                    log::info!("[audio] context created");
                    self.ctx = Some(ctx);
                }
                Err(e) => {
                    log::error!("AudioContext error: {:?}", e);
                    self.gate = AudioGate::Locked;
                }
            },
            GateAction::Resume => {
                if let Some(ctx) = &self.ctx {
                    _ = ctx.resume();
                }
            }
            GateAction::None => {}
        }
    }

    fn sync_state(&mut self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web::AudioContextState::Suspended {
                self.gate.on_suspended();
            }
        }
    }

    pub fn play_beep(&mut self) {
        self.sync_state();
        if !self.gate.can_play() {
            return;
        }
        let Some(ctx) = &self.ctx else {
            return;
        };
        if let Err(e) = fire_beep(ctx, &self.beep) {
            log::warn!("[audio] beep failed: {:?}", e);
        }
    }
}

fn fire_beep(ctx: &web::AudioContext, beep: &Beep) -> Result<(), wasm_bindgen::JsValue> {
    let now = ctx.current_time();
    let end = beep.stop_time(now);

    let osc = web::OscillatorNode::new(ctx)?;
    osc.set_type(web::OscillatorType::Sine);
    osc.frequency().set_value_at_time(beep.start_hz, now)?;
    osc.frequency()
        .exponential_ramp_to_value_at_time(beep.end_hz, end)?;

    let gain = web::GainNode::new(ctx)?;
    gain.gain().set_value_at_time(beep.gain, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(beep.gain_floor, end)?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.start()?;
    osc.stop_with_when(end)?;
    Ok(())
}
