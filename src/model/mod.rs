pub mod kinematics;
pub mod observer;

pub use observer::OrbitalObserver;
