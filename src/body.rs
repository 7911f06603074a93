use crate::prelude::*;

/// A gravitating point mass.
///
/// Velocities are in AU per year and masses in solar masses scaled by
/// `SOLAR_MASS`, so the gravitational constant drops out of the force law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec3,
    pub vel: Vec3,
    pub mass: Scalar,
}

impl Body {
    /// Builds a body from a position in AU, a velocity in AU/day and a mass
    /// in solar masses.
    pub fn new(
        x: Scalar,
        y: Scalar,
        z: Scalar,
        vx: Scalar,
        vy: Scalar,
        vz: Scalar,
        mass: Scalar,
    ) -> Self {
        Body {
            pos: Vec3::new(x, y, z),
            vel: Vec3::new(vx, vy, vz) * DAYS_PER_YEAR,
            mass: mass * SOLAR_MASS,
        }
    }

    /// Replaces the velocity so that this body cancels the momentum `p`.
    pub fn offset_momentum(&mut self, p: Vec3) {
        self.vel = -(p / SOLAR_MASS);
    }

    pub fn momentum(&self) -> Vec3 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> Scalar {
        let v = &self.vel;
        0.5 * self.mass * (v.x * v.x + v.y * v.y + v.z * v.z)
    }

    pub fn dist(&self, other: &Self) -> Scalar {
        self.dist2(other).sqrt()
    }

    pub fn dist2(&self, other: &Self) -> Scalar {
        let d = self.pos - other.pos;
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    pub fn sun() -> Self {
        Body::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0)
    }

    pub fn jupiter() -> Self {
        Body::new(
            4.84143144246472090e+00,
            -1.16032004402742839e+00,
            -1.03622044471123109e-01,
            1.66007664274403694e-03,
            7.69901118419740425e-03,
            -6.90460016972063023e-05,
            9.54791938424326609e-04,
        )
    }

    pub fn saturn() -> Self {
        Body::new(
            8.34336671824457987e+00,
            4.12479856412430479e+00,
            -4.03523417114321381e-01,
            -2.76742510726862411e-03,
            4.99852801234917238e-03,
            2.30417297573763929e-05,
            2.85885980666130812e-04,
        )
    }

    pub fn uranus() -> Self {
        Body::new(
            1.28943695621391310e+01,
            -1.51111514016986312e+01,
            -2.23307578892655734e-01,
            2.96460137564761618e-03,
            2.37847173959480950e-03,
            -2.96589568540237556e-05,
            4.36624404335156298e-05,
        )
    }

    pub fn neptune() -> Self {
        Body::new(
            1.53796971148509165e+01,
            -2.59193146099879641e+01,
            1.79258772950371181e-01,
            2.68067772490389322e-03,
            1.62824170038242295e-03,
            -9.51592254519715870e-05,
            5.15138902046611451e-05,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scales_velocity_and_mass() {
        let b = Body::new(1.0, 2.0, 3.0, 1.0, -2.0, 0.5, 2.0);
        assert_eq!(b.pos, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            b.vel,
            Vec3::new(DAYS_PER_YEAR, -2.0 * DAYS_PER_YEAR, 0.5 * DAYS_PER_YEAR)
        );
        assert_eq!(b.mass, 2.0 * SOLAR_MASS);
    }

    #[test]
    fn sun_sits_at_origin() {
        let sun = Body::sun();
        assert_eq!(sun.pos, Vec3::zeros());
        assert_eq!(sun.vel, Vec3::zeros());
        assert_eq!(sun.mass, SOLAR_MASS);
    }

    #[test]
    fn presets_have_positive_mass() {
        for b in &[Body::sun(), Body::jupiter(), Body::saturn(), Body::uranus(), Body::neptune()] {
            assert!(b.mass > 0.0);
        }
    }

    #[test]
    fn jupiter_is_scaled_from_raw_constants() {
        let j = Body::jupiter();
        assert_eq!(j.vel.x, 1.66007664274403694e-03 * 365.24);
        assert_eq!(j.mass, 9.54791938424326609e-04 * SOLAR_MASS);
    }

    #[test]
    fn offset_momentum_overwrites_velocity() {
        let mut b = Body::jupiter();
        b.offset_momentum(Vec3::new(SOLAR_MASS, -2.0 * SOLAR_MASS, 0.0));
        assert_eq!(b.vel, Vec3::new(-1.0, 2.0, -0.0));
    }

    #[test]
    fn dist_is_euclidean() {
        let a = Body::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let b = Body::new(3.0, 4.0, 12.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(a.dist2(&b), 169.0);
        assert_eq!(a.dist(&b), 13.0);
        assert_eq!(b.dist(&a), 13.0);
    }

    #[test]
    fn kinetic_energy_of_unit_body() {
        let b = Body::new(0.0, 0.0, 0.0, 1.0 / DAYS_PER_YEAR, 0.0, 0.0, 1.0 / SOLAR_MASS);
        approx::assert_relative_eq!(b.kinetic_energy(), 0.5, epsilon = 1e-12);
    }
}
