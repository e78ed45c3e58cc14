pub mod collect;
pub mod generate;
