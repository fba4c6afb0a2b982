/// Alias to a scalar floating type used for geographic computations.
pub type Float = f64;
