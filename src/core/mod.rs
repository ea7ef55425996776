//! Domaenen-Kern: Datensatz, Koordinaten-Transformation, Plot-Primitive.

pub mod dataset;
pub mod shapes;
pub mod transform;

pub use dataset::DataSet;
pub use shapes::{PlotShape, Rgba};
pub use transform::PlotTransform;
