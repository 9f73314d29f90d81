//! Ground and wall meshes from binary occupancy grids.
//!
//! The pipeline runs in four stages, each exposed as an operation:
//! [`BuildLattice`](lattice::BuildLattice) lays a dual lattice over the grid,
//! [`TriangulateLattice`](triangulation::TriangulateLattice) applies the
//! marching-squares case table, [`TraceOutlines`](outline::TraceOutlines)
//! follows the boundary loops and [`ExtrudeWalls`](walls::ExtrudeWalls) hangs
//! wall strips below them. [`GenerateMap`] chains all four.

pub mod error;
pub mod generate;
pub mod grid;
pub mod lattice;
pub mod math;
pub mod mesh;
pub mod outline;
pub mod triangulation;
pub mod walls;

pub use error::{Result, WallmeshError};
pub use generate::{GenerateMap, GeneratedMap, GenerationParams};
pub use grid::Grid;
pub use mesh::MeshBuffers;
