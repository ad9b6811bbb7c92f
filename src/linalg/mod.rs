pub mod axis;
pub mod functions;
pub mod matrix;
pub mod promote;
pub mod random;
pub mod roots;
pub mod size;
pub mod vec2;
pub mod vec3;
pub mod vec4;
pub mod vector;
