pub mod machine;
pub mod simulation;
