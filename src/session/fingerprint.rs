use xxhash_rust::xxh3::Xxh3;

use crate::choreography::progress::ReadingProgress;
use crate::foundation::core::{LengthUnit, Translate};
use crate::foundation::ids::EntityId;
use crate::foundation::visual::{StickyMode, TransitionHint, VisualState};
use crate::session::frame::FrameUpdate;

const XXH3_SEED: u64 = 0x3c6e_f372_fe94_f82b;

/// 128-bit digest of an update's derived state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UpdateFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Fingerprint everything a sink would observe. The scroll snapshot itself is excluded, so
/// scrolling that changes no state yields the same fingerprint.
pub fn fingerprint_update(update: &FrameUpdate) -> UpdateFingerprint {
    let mut h = StableHasher::new();
    match update.progress {
        Some(p) => {
            h.write_u8(1);
            write_progress(&mut h, p);
        }
        None => h.write_u8(0),
    }
    h.write_u64(update.states.len() as u64);
    for (id, state) in &update.states {
        write_entity(&mut h, *id);
        write_state(&mut h, state);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_opt_f64(&mut self, v: Option<f64>) {
        match v {
            Some(v) => {
                self.write_u8(1);
                self.write_f64(v);
            }
            None => self.write_u8(0),
        }
    }

    fn finish(self) -> UpdateFingerprint {
        let v = self.inner.digest128();
        UpdateFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_progress(h: &mut StableHasher, p: ReadingProgress) {
    h.write_f64(p.fraction);
    h.write_u8(p.percent);
    h.write_bool(p.completed);
}

fn write_entity(h: &mut StableHasher, id: EntityId) {
    match id {
        EntityId::ProgressBar => h.write_u8(0),
        EntityId::Region(r) => {
            h.write_u8(1);
            h.write_u32(r.0);
        }
    }
}

fn write_translate(h: &mut StableHasher, t: Option<Translate>) {
    let Some(t) = t else {
        h.write_u8(0);
        return;
    };
    h.write_u8(1);
    h.write_f64(t.offset.x);
    h.write_f64(t.offset.y);
    h.write_u8(match t.unit {
        LengthUnit::Px => 0,
        LengthUnit::Percent => 1,
    });
}

fn write_transition(h: &mut StableHasher, t: Option<TransitionHint>) {
    let Some(t) = t else {
        h.write_u8(0);
        return;
    };
    h.write_u8(1);
    h.write_f64(t.delay_secs);
    h.write_opt_f64(t.duration_secs);
    h.write_opt_f64(t.from_opacity);
    h.write_opt_f64(t.from_offset_y_px);
}

fn write_state(h: &mut StableHasher, s: &VisualState) {
    h.write_opt_f64(s.opacity);
    write_translate(h, s.translate);
    h.write_opt_f64(s.scale);
    h.write_opt_f64(s.scale_x);
    h.write_opt_f64(s.rotation_deg);
    h.write_u8(match s.position {
        None => 0,
        Some(StickyMode::Flowing) => 1,
        Some(StickyMode::Fixed) => 2,
        Some(StickyMode::PinnedBottom) => 3,
    });
    h.write_opt_f64(s.anchor_offset_px);
    h.write_opt_f64(s.width_px);
    h.write_u8(match s.revealed {
        None => 0,
        Some(false) => 1,
        Some(true) => 2,
    });
    write_transition(h, s.transition);
}

#[cfg(test)]
#[path = "../../tests/unit/session/fingerprint.rs"]
mod tests;
