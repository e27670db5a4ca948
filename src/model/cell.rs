use nalgebra::{Matrix3, Vector3};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("unit cell is degenerate: its volume is zero or undefined")]
    Singular,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCell {
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl UnitCell {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    pub fn from_degrees(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self::new(
            a,
            b,
            c,
            alpha.to_radians(),
            beta.to_radians(),
            gamma.to_radians(),
        )
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn alpha_degrees(&self) -> f64 {
        self.alpha.to_degrees()
    }

    pub fn beta_degrees(&self) -> f64 {
        self.beta.to_degrees()
    }

    pub fn gamma_degrees(&self) -> f64 {
        self.gamma.to_degrees()
    }

    // Columns are the lattice vectors: a along +x, b in the xy plane.
    pub fn cell_matrix(&self) -> Matrix3<f64> {
        let (sin_g, cos_g) = self.gamma.sin_cos();
        let cos_a = self.alpha.cos();
        let cos_b = self.beta.cos();

        let cx = self.c * cos_b;
        let cy = self.c * (cos_a - cos_b * cos_g) / sin_g;
        let cz = (self.c * self.c - cx * cx - cy * cy).sqrt();

        Matrix3::new(
            self.a,
            self.b * cos_g,
            cx,
            0.0,
            self.b * sin_g,
            cy,
            0.0,
            0.0,
            cz,
        )
    }

    pub fn volume(&self) -> f64 {
        self.cell_matrix().determinant()
    }

    pub fn is_degenerate(&self) -> bool {
        let volume = self.volume();
        !volume.is_finite() || volume.abs() <= f64::EPSILON
    }

    pub fn to_cartesian(&self, fractional: [f64; 3]) -> [f64; 3] {
        let v = self.cell_matrix() * Vector3::from(fractional);
        [v.x, v.y, v.z]
    }

    pub fn to_fractional(&self, cartesian: [f64; 3]) -> Result<[f64; 3], CellError> {
        let inverse = self.inverse_matrix()?;
        let v = inverse * Vector3::from(cartesian);
        Ok([v.x, v.y, v.z])
    }

    pub fn cartesian_coordinates(&self, fractional: &[[f64; 3]]) -> Vec<[f64; 3]> {
        let m = self.cell_matrix();
        fractional
            .iter()
            .map(|f| {
                let v = m * Vector3::from(*f);
                [v.x, v.y, v.z]
            })
            .collect()
    }

    pub fn fractional_coordinates(
        &self,
        cartesian: &[[f64; 3]],
    ) -> Result<Vec<[f64; 3]>, CellError> {
        let inverse = self.inverse_matrix()?;
        Ok(cartesian
            .iter()
            .map(|p| {
                let v = inverse * Vector3::from(*p);
                [v.x, v.y, v.z]
            })
            .collect())
    }

    fn inverse_matrix(&self) -> Result<Matrix3<f64>, CellError> {
        if self.is_degenerate() {
            return Err(CellError::Singular);
        }
        self.cell_matrix().try_inverse().ok_or(CellError::Singular)
    }
}
