//! Reine Geometrie-Funktionen für die vier Interpolations-Basen.
//!
//! Layer-neutral: kann von `core`, `app` und Benchmarks importiert werden
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec3;

/// Toleranz, ab der ein Segment-Parameter als "am Ende" gilt.
const PARAM_END_EPSILON: f32 = 1e-6;

/// P(u) = (1-u)·P0 + u·P1
pub fn line_point(p0: Vec3, p1: Vec3, u: f32) -> Vec3 {
    (1.0 - u) * p0 + u * p1
}

/// Kubische Hermite-Basis.
///
/// `t0`/`t1` sind die relativen Tangenten und gehen direkt als
/// Basis-Koeffizienten ein (nicht als Position + Tangente).
pub fn hermite_point(p0: Vec3, p1: Vec3, t0: Vec3, t1: Vec3, u: f32) -> Vec3 {
    let u2 = u * u;
    let u3 = u2 * u;
    (2.0 * u3 - 3.0 * u2 + 1.0) * p0
        + (-2.0 * u3 + 3.0 * u2) * p1
        + (u3 - 2.0 * u2 + u) * t0
        + (u3 - u2) * t1
}

/// Parabel-Mischung über vier Punkte (Catmull-Rom-artig).
///
/// Die Kurve verläuft von p1 nach p2.
pub fn parabola_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, u: f32) -> Vec3 {
    let u2 = u * u;
    let u3 = u2 * u;
    0.5 * ((-u3 + 2.0 * u2 - u) * p0
        + (3.0 * u3 - 5.0 * u2 + 2.0) * p1
        + (-3.0 * u3 + 4.0 * u2 + u) * p2
        + (u3 - u2) * p3)
}

/// B(u) = (1-u)³·P0 + 3(1-u)²u·P1 + 3(1-u)u²·P2 + u³·P3
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, u: f32) -> Vec3 {
    let inv = 1.0 - u;
    let inv2 = inv * inv;
    let u2 = u * u;
    inv2 * inv * p0 + 3.0 * inv2 * u * p1 + 3.0 * inv * u2 * p2 + u2 * u * p3
}

/// Tastet ein Segment im Abstand `step` ab und hängt die Samples an `out` an.
///
/// Emittiert `eval(k·step)` solange `k·step < 1`, danach genau einmal den
/// exakten Segment-Endpunkt `end`. Der Parameter wird pro `k` neu berechnet,
/// damit sich kein Rundungsfehler aufsummiert.
pub fn sample_segment(eval: impl Fn(f32) -> Vec3, end: Vec3, step: f32, out: &mut Vec<Vec3>) {
    let mut k = 0usize;
    loop {
        let u = k as f32 * step;
        if u >= 1.0 - PARAM_END_EPSILON {
            break;
        }
        out.push(eval(u));
        k += 1;
    }
    out.push(end);
}

/// Anzahl der Samples, die `sample_segment` für einen Schritt erzeugt.
///
/// Sättigt bei `usize::MAX` für extrem kleine Schritte.
pub fn samples_per_segment(step: f32) -> usize {
    // `as usize` sättigt bei zu großen Werten
    let inner = ((1.0 - PARAM_END_EPSILON) / step).ceil() as usize;
    inner.saturating_add(1)
}

/// Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
