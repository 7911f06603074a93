use crate::prelude::*;

use log::{debug, trace};

pub mod body;
pub mod prelude;

pub const BODY_COUNT: usize = 5;

/// The sun and the four outer planets, advanced together.
///
/// Bodies are kept in a fixed order (sun, jupiter, saturn, uranus, neptune);
/// the order only matters for the pair iteration, which is always `i < j`.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
	bodies: [Body; BODY_COUNT],
}

impl System {
	/// Builds the five bodies and shifts the sun's velocity so the total
	/// momentum of the system is zero.
	pub fn new() -> Self {
		let mut bodies = [
			Body::sun(),
			Body::jupiter(),
			Body::saturn(),
			Body::uranus(),
			Body::neptune(),
		];

		let p = total_momentum(&bodies);
		bodies[0].offset_momentum(p);
		debug!("offset sun momentum by {:?}", p);

		System { bodies }
	}

	pub fn bodies(&self) -> &[Body] {
		&self.bodies
	}

	/// One leapfrog step: every pairwise velocity kick first, then every drift.
	pub fn advance(&mut self, dt: Scalar) {
		trace!("advance dt: {}", dt);
		let len = self.bodies.len();

		for i in 0..len {
			// Split so body i and every later body can be borrowed mutably at once.
			let (head, tail) = self.bodies.split_at_mut(i + 1);
			let body = &mut head[i];

			for bodyb in tail.iter_mut() {
				let d = body.pos - bodyb.pos;
				let dist2 = d.x * d.x + d.y * d.y + d.z * d.z;
				let mag = dt / (dist2 * dist2.sqrt());

				body.vel -= d * bodyb.mass * mag;
				bodyb.vel += d * body.mass * mag;
			}
		}

		for body in self.bodies.iter_mut() {
			body.pos += dt * body.vel;
		}
	}

	/// Runs `n` steps of size `dt`. A non-positive `n` leaves the system untouched.
	pub fn run(&mut self, n: i64, dt: Scalar) {
		for _ in 0..n {
			self.advance(dt);
		}
	}

	/// Kinetic minus potential energy of the whole system.
	pub fn energy(&self) -> Scalar {
		let len = self.bodies.len();
		let mut e = 0.0;

		for i in 0..len {
			let body = &self.bodies[i];
			e += body.kinetic_energy();

			for bodyb in &self.bodies[i + 1..] {
				e -= (body.mass * bodyb.mass) / body.dist(bodyb);
			}
		}

		e
	}

	/// Total momentum, `sum(mass * vel)`.
	pub fn momentum(&self) -> Vec3 {
		total_momentum(&self.bodies)
	}
}

fn total_momentum(bodies: &[Body]) -> Vec3 {
	let mut p = Vec3::zeros();
	for body in bodies {
		p += body.momentum();
	}
	p
}

impl Default for System {
	fn default() -> Self {
		System::new()
	}
}
