mod parameter_collector;
pub mod prompt_rendering;
mod script_generator;

pub use parameter_collector::ParameterCollector;
pub use script_generator::ScriptGenerator;
