//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::MemoryCard;

/// Python wrapper for MemoryCard.
///
/// A read-only snapshot; flipping goes through the game or session.
#[pyclass(name = "MemoryCard")]
#[derive(Clone, Debug)]
pub struct PyMemoryCard(pub MemoryCard);

#[pymethods]
impl PyMemoryCard {
    /// Image identifier: a URL, or `Builtin(<id>)` for built-in icons.
    #[getter]
    fn identifier(&self) -> String {
        self.0.identifier().to_string()
    }

    /// Built-in resource id, if this card shows a built-in icon.
    #[getter]
    fn builtin_id(&self) -> Option<u32> {
        match self.0.identifier() {
            crate::cards::ImageId::Builtin(id) => Some(*id),
            crate::cards::ImageId::Url(_) => None,
        }
    }

    #[getter]
    fn is_face_up(&self) -> bool {
        self.0.is_face_up()
    }

    #[getter]
    fn is_matched(&self) -> bool {
        self.0.is_matched()
    }

    fn __repr__(&self) -> String {
        format!(
            "MemoryCard({}, face_up={}, matched={})",
            self.0.identifier(),
            self.0.is_face_up(),
            self.0.is_matched()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
