mod elements;
mod orbit_path;
mod rotation;
mod vec3d;
#[cfg(test)]
mod tests;

pub use elements::{AU_KM, ElementsError, OrbitalElements, RequiredElement};
pub use orbit_path::OrbitPath;
pub use rotation::Matrix3;
pub use vec3d::Vec3D;
