//! Utilidades sueltas: unir textos, mediana y sumas
pub mod joiner;
pub mod median;
pub mod summer;
