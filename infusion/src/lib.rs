pub mod food;
pub mod tag;

pub use food::InfusedFood;
pub use tag::Infusion;
