use quicksilver::geom::Vector;

#[derive(Clone, Debug, PartialEq)]
pub struct Avatar {
    pub pos: Vector,
    pub velocity_y: f32,
    pub size: Vector,
}

impl Avatar {
    pub fn new(pos: Vector, size: Vector) -> Avatar {
        Avatar { pos, velocity_y: 0f32, size }
    }

    /// Trailing edge.
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    /// Leading edge.
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn head(&self) -> f32 {
        self.pos.y
    }

    pub fn feet(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The single gapped wall on screen. `opening_y` is the centre of the gap.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub pos_x: f32,
    pub opening_y: f32,
    pub opening_height: f32,
    pub segment_size: f32,
}

impl Obstacle {
    pub fn left(&self) -> f32 {
        self.pos_x
    }

    pub fn right(&self) -> f32 {
        self.pos_x + self.segment_size
    }

    pub fn opening_top(&self) -> f32 {
        self.opening_y - self.opening_height / 2f32
    }

    pub fn opening_bottom(&self) -> f32 {
        self.opening_y + self.opening_height / 2f32
    }
}
