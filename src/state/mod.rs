// ============================================================================
// STATE MODULE - Máquinas de estado compartidas con Rc<RefCell>
// ============================================================================

pub mod selection_chain;

pub use selection_chain::{ChainCommand, ChainStage, DatesToken, ListingToken, SelectionChain};
