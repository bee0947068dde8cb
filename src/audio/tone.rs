use std::f32::consts::TAU;
use std::time::Duration;

use super::AlertKind;

const SAMPLE_RATE: u32 = 44100;

/// One tone inside an alert pattern. Times are offsets from the start of the
/// pattern.
#[derive(Debug, Clone, Copy)]
struct Beep {
    start_ms: u32,
    duration_ms: u32,
    freq_hz: f32,
    /// Frequency switch `(after_ms, freq_hz)`, relative to the beep start.
    drop_to: Option<(u32, f32)>,
    gain: f32,
}

impl Beep {
    fn end_ms(&self) -> u32 {
        self.start_ms + self.duration_ms
    }

    fn covers(&self, t_ms: f32) -> bool {
        t_ms >= self.start_ms as f32 && t_ms < self.end_ms() as f32
    }

    fn frequency_at(&self, t_ms: f32) -> f32 {
        match self.drop_to {
            Some((after_ms, freq)) if t_ms - self.start_ms as f32 >= after_ms as f32 => freq,
            _ => self.freq_hz,
        }
    }
}

const DANGER_BEEP: Beep = Beep {
    start_ms: 0,
    duration_ms: 200,
    freq_hz: 1000.0,
    drop_to: Some((100, 800.0)),
    gain: 0.3,
};

/// Two falling beeps, the second 250 ms after the first.
static DANGER: [Beep; 2] = [
    DANGER_BEEP,
    Beep {
        start_ms: 250,
        ..DANGER_BEEP
    },
];

/// One short, lower beep.
static WARNING: [Beep; 1] = [Beep {
    start_ms: 0,
    duration_ms: 150,
    freq_hz: 600.0,
    drop_to: None,
    gain: 0.2,
}];

/// Finite mono sine pattern for an alert. Silence between beeps is rendered
/// as zeros so the pattern plays as a single source.
pub struct AlertTone {
    beeps: &'static [Beep],
    sample_rate: u32,
    num_sample: u64,
    total_samples: u64,
    phase: f32,
}

impl AlertTone {
    pub fn new(kind: AlertKind) -> Self {
        let beeps: &'static [Beep] = match kind {
            AlertKind::Danger => &DANGER,
            AlertKind::Warning => &WARNING,
        };
        let end_ms = beeps.iter().map(Beep::end_ms).max().unwrap_or(0);

        Self {
            beeps,
            sample_rate: SAMPLE_RATE,
            num_sample: 0,
            total_samples: u64::from(end_ms) * u64::from(SAMPLE_RATE) / 1000,
            phase: 0.0,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.total_samples * 1000 / u64::from(self.sample_rate))
    }
}

impl Iterator for AlertTone {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.num_sample >= self.total_samples {
            return None;
        }

        let t_ms = self.num_sample as f32 * 1000.0 / self.sample_rate as f32;
        self.num_sample += 1;

        let sample = match self.beeps.iter().find(|beep| beep.covers(t_ms)) {
            Some(beep) => {
                // Accumulate phase so the frequency drop does not click.
                let freq = beep.frequency_at(t_ms);
                self.phase = (self.phase + TAU * freq / self.sample_rate as f32) % TAU;
                beep.gain * self.phase.sin()
            }
            None => 0.0,
        };

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_samples - self.num_sample) as usize;
        (remaining, Some(remaining))
    }
}

#[cfg(feature = "audio")]
impl rodio::Source for AlertTone {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1 // Mono
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.duration())
    }
}
