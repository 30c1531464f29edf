pub mod raster;
pub mod svg;
pub mod terminal;
