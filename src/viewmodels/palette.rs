use rand::Rng;
use crate::utils::ROUTE_COLORS;

/// Color uniforme de la paleta para una nueva corrida
pub fn pick_route_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ROUTE_COLORS[rng.gen_range(0..ROUTE_COLORS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_palette_color_is_picked_roughly_uniformly() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 20_000;
        let mut counts = [0usize; ROUTE_COLORS.len()];

        for _ in 0..trials {
            let color = pick_route_color(&mut rng);
            let index = ROUTE_COLORS.iter().position(|c| *c == color).unwrap();
            counts[index] += 1;
        }

        let expected = trials / ROUTE_COLORS.len();
        for (color, count) in ROUTE_COLORS.iter().zip(counts) {
            // ±15% del valor esperado
            assert!(
                count > expected * 85 / 100 && count < expected * 115 / 100,
                "{} picked {} times, expected ~{}",
                color, count, expected
            );
        }
    }
}
