pub mod matrix;
pub mod interp;

pub use matrix::Matrix;
pub use interp::interp_linear;
