use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::{DigestWidth, PearsonError, PearsonHasher};

impl From<PearsonError> for PyErr {
    fn from(err: PearsonError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Pearson hash exposed for Python
#[pyfunction]
#[pyo3(signature = (data, bits = 8))]
fn pearson_hash<'py>(py: Python<'py>, data: &[u8], bits: u32) -> PyResult<&'py PyBytes> {
    let width = DigestWidth::from_bits(bits)?;
    let digest = crate::hash_funcs::pearson_hash(width, data);
    Ok(PyBytes::new(py, &digest))
}

/// Streaming hasher exposed for Python, shaped like `hashlib` objects.
#[pyclass(name = "PearsonHasher")]
struct PyPearsonHasher {
    inner: PearsonHasher,
}

#[pymethods]
impl PyPearsonHasher {
    #[new]
    #[pyo3(signature = (bits = 8))]
    fn new(bits: u32) -> PyResult<Self> {
        let width = DigestWidth::from_bits(bits)?;
        Ok(Self {
            inner: PearsonHasher::new(width),
        })
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.write(data);
    }

    fn digest<'py>(&self, py: Python<'py>) -> &'py PyBytes {
        PyBytes::new(py, self.inner.digest())
    }

    fn hexdigest(&self) -> String {
        self.inner.hex_digest()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    #[getter]
    fn digest_size(&self) -> usize {
        self.inner.size()
    }

    #[getter]
    fn block_size(&self) -> usize {
        self.inner.block_size()
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn pearson(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(pearson_hash, m)?)?;
    m.add_class::<PyPearsonHasher>()?;
    Ok(())
}
