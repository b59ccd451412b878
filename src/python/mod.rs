//! Python bindings for the memory-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! session = mm.GameSession(board_size="easy", seed=42)
//! outcome = session.tap(0)
//! print(session.pairs_label, session.moves_label)
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_game;

pub use py_cards::*;
pub use py_game::*;

/// memory-match: a memory/matching card game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryCard>()?;
    m.add_class::<PyMemoryGame>()?;
    m.add_class::<PyTapOutcome>()?;
    m.add_class::<PyGameSession>()?;

    Ok(())
}
