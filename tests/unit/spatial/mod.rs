mod generator;
mod grid;
