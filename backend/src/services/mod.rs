pub mod machines;
pub mod simulations;
