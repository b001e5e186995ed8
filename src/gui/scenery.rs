use quicksilver::geom::Vector;
use quicksilver::graphics::Color;
use rand::Rng;

// (56, 72, 148)
pub const SKY: Color = Color { r: 0.2196, g: 0.2824, b: 0.5804, a: 1f32 };
// (130, 240, 150)
const BUSH: Color = Color { r: 0.5098, g: 0.9412, b: 0.5882, a: 1f32 };
// (240, 240, 240)
const CLOUD: Color = Color { r: 0.9412, g: 0.9412, b: 0.9412, a: 1f32 };
const BUSHES: usize = 12;
const CLOUDS: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    pub center: Vector,
    pub radius: f32,
    pub color: Color,
}

/// Decorative bushes and clouds. Rolled once at startup; gameplay never
/// looks at it.
#[derive(Clone, Debug)]
pub struct Scenery {
    blobs: Vec<Blob>,
}

impl Scenery {
    pub fn generate(screen_size: Vector, rng: &mut impl Rng) -> Scenery {
        let mut blobs = Vec::with_capacity(BUSHES + CLOUDS);
        for _ in 0..BUSHES {
            blobs.push(Blob {
                center: Vector::new(rng.gen_range(0f32, screen_size.x), screen_size.y),
                radius: rng.gen_range(10f32, 40f32),
                color: BUSH,
            });
        }
        for _ in 0..CLOUDS {
            blobs.push(Blob {
                center: Vector::new(rng.gen_range(0f32, screen_size.x), rng.gen_range(0f32, screen_size.y / 2f32)),
                radius: rng.gen_range(5f32, 20f32),
                color: CLOUD,
            });
        }
        Scenery { blobs }
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn bushes_sit_on_the_ground_and_clouds_in_the_sky() {
        let size = Vector::new(440f32, 400f32);
        let scenery = Scenery::generate(size, &mut StdRng::seed_from_u64(3));
        let (bushes, clouds): (Vec<&Blob>, Vec<&Blob>) = scenery.blobs().iter().partition(|blob| blob.color == BUSH);

        assert_eq!(bushes.len(), BUSHES);
        assert_eq!(clouds.len(), CLOUDS);
        assert!(bushes.iter().all(|b| b.center.y == 400f32 && b.radius >= 10f32 && b.radius < 40f32));
        assert!(clouds.iter().all(|c| c.center.y < 200f32 && c.radius >= 5f32 && c.radius < 20f32));
        assert!(scenery.blobs().iter().all(|blob| blob.center.x >= 0f32 && blob.center.x < 440f32));
    }
}
