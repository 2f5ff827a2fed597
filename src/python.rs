use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::ps::{group_by_length, MiningConfig, PrefixSpan, PrefixSpanError, SequenceDb};

impl From<PrefixSpanError> for PyErr {
    fn from(err: PrefixSpanError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pyclass(name = "PrefixSpan", module = "prefixspan")]
struct PyPrefixSpan {
    inner: PrefixSpan<i64>,
}

#[pymethods]
impl PyPrefixSpan {
    #[new]
    #[pyo3(signature = (db, minlen=None, maxlen=None))]
    fn new(db: Vec<Vec<i64>>, minlen: Option<usize>, maxlen: Option<usize>) -> Self {
        Self {
            inner: PrefixSpan::with_config(db, MiningConfig::new(minlen, maxlen)),
        }
    }

    /// Build from a 2-D array, one sequence per row, ending at `pad`.
    #[staticmethod]
    #[pyo3(signature = (array, pad=-1, minlen=None, maxlen=None))]
    fn from_array(
        array: PyReadonlyArray2<'_, i64>,
        pad: i64,
        minlen: Option<usize>,
        maxlen: Option<usize>,
    ) -> PyResult<Self> {
        let view = array.as_array();
        let width = view.shape()[1];
        let cells: Vec<i64> = view.iter().copied().collect();
        let db = SequenceDb::from_padded(&cells, width, &pad)?;

        Ok(Self {
            inner: PrefixSpan::with_config(db, MiningConfig::new(minlen, maxlen)),
        })
    }

    #[getter]
    fn minlen(&self) -> usize {
        self.inner.config().minlen()
    }

    #[getter]
    fn maxlen(&self) -> Option<usize> {
        self.inner.config().maxlen()
    }

    fn __len__(&self) -> usize {
        self.inner.database().len()
    }

    #[pyo3(signature = (minsup, allow_gap=true))]
    fn frequent(&self, minsup: usize, allow_gap: bool) -> Vec<(usize, Vec<i64>)> {
        self.inner.frequent_par(minsup, allow_gap)
    }

    fn topk(&self, k: usize) -> Vec<(usize, Vec<i64>)> {
        self.inner.topk(k)
    }

    /// Frequent patterns as one `(supports, patterns)` pair of arrays per
    /// pattern length.
    #[pyo3(signature = (minsup, allow_gap=true))]
    fn frequent_levels<'py>(
        &self,
        py: Python<'py>,
        minsup: usize,
        allow_gap: bool,
    ) -> PyResult<Vec<(Bound<'py, PyArray1<usize>>, Bound<'py, PyArray2<i64>>)>> {
        let results = self.inner.frequent_par(minsup, allow_gap);
        let mut arrays = Vec::new();

        for level in group_by_length(&results) {
            if level.is_empty() {
                continue;
            }

            let shape = (level.len(), level.pattern_len);
            let patterns = Array2::from_shape_vec(shape, level.items)
                .map_err(|_| PyValueError::new_err("Failed to create array"))?;

            arrays.push((level.supports.into_pyarray(py), patterns.into_pyarray(py)));
        }

        Ok(arrays)
    }
}

#[pymodule]
fn prefixspan(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPrefixSpan>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
