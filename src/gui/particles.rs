use eframe::egui::{
    self,
    Pos2,
};
use rand::Rng;

use super::theme::Theme;

const PARTICLE_COUNT: usize = 50;

struct Particle {
    from: Pos2, // Normalized to the screen, 0..1 on both axes
    to: Pos2,
    period: f64, // Seconds for one leg of the trip
}

impl Particle {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            from: Pos2::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)),
            to: Pos2::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)),
            period: rng.random_range(10.0..30.0),
        }
    }

    /// Travels from `from` to `to` and back again, forever.
    fn position_at(&self, time: f64) -> Pos2 {
        let leg = time / self.period;
        let progress = leg.fract() as f32;
        let t = if (leg as u64) % 2 == 0 { progress } else { 1.0 - progress };
        self.from.lerp(self.to, t)
    }
}

/// Decorative dots drifting behind the page.
pub struct Particles {
    particles: Vec<Particle>,
}

impl Particles {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self { particles: (0..PARTICLE_COUNT).map(|_| Particle::random(&mut rng)).collect() }
    }

    /// Paints behind whatever `ui` draws next.
    pub fn paint(&self, ui: &egui::Ui, theme: &Theme) {
        let area = ui.max_rect();
        let time = ui.input(|i| i.time);
        let color = theme.particle(ui.ctx());
        let painter = ui.painter();

        for particle in &self.particles {
            let normalized = particle.position_at(time);
            let position =
                area.min + egui::vec2(normalized.x * area.width(), normalized.y * area.height());
            painter.circle_filled(position, 4.0, color);
        }

        ui.ctx().request_repaint();
    }
}

impl Default for Particles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_ping_pongs() {
        let particle =
            Particle { from: Pos2::new(0.0, 0.0), to: Pos2::new(1.0, 0.5), period: 10.0 };
        assert_eq!(particle.position_at(0.0), Pos2::new(0.0, 0.0));
        assert_eq!(particle.position_at(5.0), Pos2::new(0.5, 0.25));
        assert_eq!(particle.position_at(15.0), Pos2::new(0.5, 0.25));
        assert_eq!(particle.position_at(20.0), Pos2::new(0.0, 0.0));
    }

    #[test]
    fn test_random_particles_stay_on_screen() {
        let particles = Particles::new();
        assert_eq!(particles.particles.len(), PARTICLE_COUNT);
        for particle in &particles.particles {
            for t in [0.0, 3.3, 17.0, 123.4] {
                let p = particle.position_at(t);
                assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
            }
        }
    }
}
