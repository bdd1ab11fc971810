pub mod a001_placement;
