use super::elements;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub atomic_number: u8,
    pub position3d: Option<[f64; 3]>,
    pub position2d: Option<[f64; 2]>,
}

impl Atom {
    pub fn new(atomic_number: u8) -> Self {
        Self {
            atomic_number,
            position3d: None,
            position2d: None,
        }
    }

    pub fn with_position3d(mut self, position: [f64; 3]) -> Self {
        self.position3d = Some(position);
        self
    }

    pub fn with_position2d(mut self, position: [f64; 2]) -> Self {
        self.position2d = Some(position);
        self
    }

    pub fn symbol(&self) -> Option<&'static str> {
        elements::symbol(self.atomic_number)
    }
}
