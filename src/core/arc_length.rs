//! Arc-Length-Walker: Abspielen einer Polyline mit konstanter Geschwindigkeit.

use glam::Vec3;

/// Ergebnis eines `advance`-Aufrufs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalkStep {
    /// Position auf der Polyline; der Walker läuft weiter
    Moving(Vec3),
    /// Ende erreicht: letztes Sample, der Walker ist inaktiv
    Finished(Vec3),
}

impl WalkStep {
    /// Position unabhängig vom Zustand.
    pub fn position(self) -> Vec3 {
        match self {
            WalkStep::Moving(p) | WalkStep::Finished(p) => p,
        }
    }
}

/// Wandelt verstrichene Zeit × Geschwindigkeit in eine Position entlang
/// einer abgetasteten Polyline um.
///
/// `now` muss zwischen zwei `advance`-Aufrufen monoton nicht fallend sein;
/// der interne Cursor läuft nur vorwärts.
#[derive(Debug, Clone, Default)]
pub struct ArcLengthWalker {
    samples: Vec<Vec3>,
    /// cumulative[0] = 0, cumulative[i] = cumulative[i-1] + |s[i] - s[i-1]|
    cumulative: Vec<f32>,
    start_time: f64,
    cursor: usize,
    active: bool,
}

impl ArcLengthWalker {
    /// Erstellt einen inaktiven Walker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet einen neuen Lauf und verwirft laufenden Zustand.
    ///
    /// Bei weniger als 2 Samples bleibt der Walker inaktiv; Rückgabe `false`.
    pub fn start(&mut self, samples: Vec<Vec3>, now: f64) -> bool {
        if samples.len() <= 1 {
            log::warn!(
                "Abspielen nicht möglich: {} Sample(s), mindestens 2 nötig",
                samples.len()
            );
            *self = Self::new();
            return false;
        }

        let mut cumulative = Vec::with_capacity(samples.len());
        let mut total = 0.0f32;
        cumulative.push(total);
        for w in samples.windows(2) {
            total += w[0].distance(w[1]);
            cumulative.push(total);
        }

        log::info!(
            "Abspielen gestartet: {} Samples, Länge {:.3}",
            samples.len(),
            total
        );
        self.samples = samples;
        self.cumulative = cumulative;
        self.start_time = now;
        self.cursor = 0;
        self.active = true;
        true
    }

    /// Ob gerade ein Lauf aktiv ist.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Gesamte Bogenlänge der aktuellen Polyline.
    pub fn total_length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Kumulierte Längen (gleich lang wie die Samples).
    pub fn cumulative_lengths(&self) -> &[f32] {
        &self.cumulative
    }

    /// Bricht den Lauf ab.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Position nach `velocity · (now - start_time)` zurückgelegter Strecke.
    ///
    /// Gibt `None`, wenn der Walker inaktiv ist. Liegt die Strecke hinter
    /// dem Ende, wird das letzte Sample mit `Finished` geliefert und der
    /// Walker deaktiviert.
    pub fn advance(&mut self, now: f64, velocity: f32) -> Option<WalkStep> {
        if !self.active {
            return None;
        }
        let distance = (f64::from(velocity) * (now - self.start_time)) as f32;

        while self.cursor < self.cumulative.len() && self.cumulative[self.cursor] < distance {
            self.cursor += 1;
        }

        if self.cursor >= self.samples.len() {
            self.active = false;
            let last = self.samples[self.samples.len() - 1];
            log::info!("Abspielen beendet bei {}", last);
            return Some(WalkStep::Finished(last));
        }
        if self.cursor == 0 {
            return Some(WalkStep::Moving(self.samples[0]));
        }

        let i = self.cursor;
        let len_before = self.cumulative[i - 1];
        let len_after = self.cumulative[i];
        // Zusammenfallende Samples: Sprung ohne Division
        let frac = if (len_after - len_before).abs() > f32::EPSILON {
            (distance - len_before) / (len_after - len_before)
        } else {
            0.0
        };
        Some(WalkStep::Moving(
            self.samples[i - 1].lerp(self.samples[i], frac),
        ))
    }
}
