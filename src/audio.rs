//! Sound effect notifications
//!
//! The simulation only emits [`GameEvent`]s. This module maps them onto sound
//! effects and hands those to whatever backend is plugged in.

use crate::config::AudioConfig;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A piece landed on a burger ("plop")
    Stacked,
    /// A burger was sold ("cash register")
    Sell,
}

impl SoundEffect {
    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::Stacked => "plop",
            SoundEffect::Sell => "cash_register",
        }
    }

    /// Effect for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PieceLanded { .. } => Some(SoundEffect::Stacked),
            GameEvent::StackSold { .. } => Some(SoundEffect::Sell),
            GameEvent::LaneFull { .. } => None,
        }
    }
}

/// Audio backend
pub trait SoundSink {
    /// Play `effect` at `volume` (0.0 - 1.0), fire and forget
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs what would be played
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Sound: {} at volume {:.2}", effect.name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn SoundSink>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(sink: Box<dyn SoundSink>, config: &AudioConfig) -> Self {
        let mut manager = Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: config.muted,
        };
        manager.set_master_volume(config.master_volume);
        manager.set_sfx_volume(config.sfx_volume);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play whatever belongs to a simulation event
    pub fn notify(&mut self, event: &GameEvent) {
        if let Some(effect) = SoundEffect::for_event(event) {
            self.play(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::IngredientKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<(SoundEffect, f32)>>>);

    impl SoundSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.borrow_mut().push((effect, volume));
        }
    }

    fn manager(config: &AudioConfig) -> (AudioManager, Recorder) {
        let recorder = Recorder::default();
        (AudioManager::new(Box::new(recorder.clone()), config), recorder)
    }

    #[test]
    fn test_events_map_to_effects() {
        let (mut audio, recorder) = manager(&AudioConfig::default());

        audio.notify(&GameEvent::PieceLanded {
            lane: 0,
            kind: IngredientKind::Ham,
        });
        audio.notify(&GameEvent::StackSold { lane: 1, revenue: 3 });
        audio.notify(&GameEvent::LaneFull { lane: 2 });

        let played: Vec<_> = recorder.0.borrow().iter().map(|(e, _)| *e).collect();
        assert_eq!(played, vec![SoundEffect::Stacked, SoundEffect::Sell]);
    }

    #[test]
    fn test_volume_scaling_and_mute() {
        let config = AudioConfig {
            master_volume: 0.5,
            sfx_volume: 2.0,
            muted: false,
        };
        let (mut audio, recorder) = manager(&config);

        audio.play(SoundEffect::Sell);
        assert_eq!(recorder.0.borrow()[0], (SoundEffect::Sell, 0.5));

        audio.set_muted(true);
        audio.play(SoundEffect::Sell);
        assert_eq!(recorder.0.borrow().len(), 1);
    }
}
