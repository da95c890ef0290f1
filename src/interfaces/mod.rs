// ============================================================================
// Interfaces Module
// Capability traits for the external collaborators of the calculator
// ============================================================================

mod dosing_specification;
mod weighable;

pub use dosing_specification::DosingSpecification;
pub use weighable::Weighable;
