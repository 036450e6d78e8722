//! # Mesh Operations
//!
//! Surface construction from cross-section rings:
//! - **loft_straight**: Ruled skin through an ordered list of rings
//! - **cap_planar_holes**: Close flat boundary loops to obtain a solid

pub mod cap;
pub mod loft;

pub use cap::cap_planar_holes;
pub use loft::loft_straight;
