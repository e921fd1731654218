/// Font catalog used by the text-styling picker.
pub mod fonts;
/// Edit settings that shape the instruction.
pub mod state;
/// Instruction text and payload synthesis.
pub mod synth;
