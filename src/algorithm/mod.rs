/// Randomized depth-first passage carving
pub mod carver;
/// Maze session tying grid, randomness and solved path together
pub mod generator;
/// Wall removal for braided mazes
pub mod imperfection;
/// Breadth-first shortest path search
pub mod solver;
