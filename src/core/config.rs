pub const EPSILON: f64 = 1e-9;
pub const EPSILON_F32: f32 = 1e-5;
