#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct User {
    height: u16,
}

impl User {
    pub fn new(height_cm: u16) -> Self {
        Self { height: height_cm }
    }
    pub fn height_cm(&self) -> u16 {
        self.height
    }
    pub fn height_m(&self) -> f64 {
        self.height as f64 / 100.0
    }
}
